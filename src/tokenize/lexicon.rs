//! Greedy longest-match tokenizer over a TSV lexicon.
//!
//! Lexicon format, one entry per line:
//!
//! ```text
//! surface<TAB>reading<TAB>part-of-speech
//! ```
//!
//! `reading` and `part-of-speech` may be empty. Lines starting with `#` and
//! blank lines are skipped. Characters not covered by any entry become
//! single-char tokens with no reading or POS.

use std::collections::HashMap;
use std::path::Path;

use super::{Token, TokenSequence, TokenizeError, Tokenizer};

/// Dictionary-backed [`Tokenizer`].
///
/// Loaded once at startup from [`AppPaths::lexicon_file`]
/// (`crate::config::AppPaths`); a missing or empty lexicon is a
/// [`TokenizeError::ResourceInit`], after which the pipeline disables
/// tokenization for the rest of the process.
#[derive(Debug)]
pub struct LexiconTokenizer {
    entries: HashMap<String, (Option<String>, Option<String>)>,
    max_surface_chars: usize,
}

impl LexiconTokenizer {
    /// Load the lexicon at `path`.
    pub fn load(path: &Path) -> Result<Self, TokenizeError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TokenizeError::ResourceInit(format!("{}: {e}", path.display())))?;
        Self::from_tsv(&content)
    }

    /// Build directly from TSV content (used by tests).
    pub fn from_tsv(content: &str) -> Result<Self, TokenizeError> {
        let mut entries = HashMap::new();
        let mut max_surface_chars = 0;

        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let surface = match fields.next() {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => continue,
            };
            let reading = fields.next().filter(|s| !s.is_empty()).map(String::from);
            let pos = fields.next().filter(|s| !s.is_empty()).map(String::from);

            max_surface_chars = max_surface_chars.max(surface.chars().count());
            entries.insert(surface, (reading, pos));
        }

        if entries.is_empty() {
            return Err(TokenizeError::ResourceInit(
                "lexicon contains no entries".into(),
            ));
        }

        log::info!("tokenize: loaded {} lexicon entries", entries.len());
        Ok(Self {
            entries,
            max_surface_chars,
        })
    }

    /// Number of lexicon entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tokenizer for LexiconTokenizer {
    fn tokenize(&self, text: &str) -> TokenSequence {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let longest = self.max_surface_chars.min(chars.len() - i);
            let mut hit = None;

            for len in (1..=longest).rev() {
                let candidate: String = chars[i..i + len].iter().collect();
                if let Some((reading, pos)) = self.entries.get(&candidate) {
                    hit = Some((candidate, reading.clone(), pos.clone(), len));
                    break;
                }
            }

            match hit {
                Some((surface, reading, part_of_speech, len)) => {
                    tokens.push(Token {
                        surface,
                        reading,
                        part_of_speech,
                    });
                    i += len;
                }
                None => {
                    tokens.push(Token::surface_only(chars[i].to_string()));
                    i += 1;
                }
            }
        }

        tokens
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const LEXICON: &str = "\
# test lexicon
先生\tせんせい\t名詞
大学\tだいがく\t名詞
大\tだい\t接頭辞
です\tです\t助動詞
は\tは\t助詞
";

    fn tokenizer() -> LexiconTokenizer {
        LexiconTokenizer::from_tsv(LEXICON).expect("lexicon")
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempdir().expect("temp dir");
        let err = LexiconTokenizer::load(&dir.path().join("missing.tsv")).unwrap_err();
        assert!(matches!(err, TokenizeError::ResourceInit(_)));
    }

    #[test]
    fn load_fails_on_empty_lexicon() {
        let err = LexiconTokenizer::from_tsv("# only a comment\n\n").unwrap_err();
        assert!(matches!(err, TokenizeError::ResourceInit(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("lexicon.tsv");
        std::fs::write(&path, LEXICON).unwrap();

        let tok = LexiconTokenizer::load(&path).expect("load");
        assert_eq!(tok.len(), 5);
    }

    #[test]
    fn longest_match_wins_over_prefix() {
        // "大学" must be matched as one token, not "大" + unknown "学".
        let tokens = tokenizer().tokenize("大学です");
        assert_eq!(
            tokens,
            vec![
                Token {
                    surface: "大学".into(),
                    reading: Some("だいがく".into()),
                    part_of_speech: Some("名詞".into()),
                },
                Token {
                    surface: "です".into(),
                    reading: Some("です".into()),
                    part_of_speech: Some("助動詞".into()),
                },
            ]
        );
    }

    #[test]
    fn unknown_chars_become_surface_only_tokens() {
        let tokens = tokenizer().tokenize("猫は");
        assert_eq!(tokens[0], Token::surface_only("猫"));
        assert_eq!(tokens[1].surface, "は");
        assert_eq!(tokens[1].part_of_speech.as_deref(), Some("助詞"));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenizer().tokenize("").is_empty());
    }

    #[test]
    fn surfaces_concatenate_back_to_input() {
        let input = "先生は大学です猫";
        let tokens = tokenizer().tokenize(input);
        let joined: String = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn entries_without_reading_or_pos_parse() {
        let tok = LexiconTokenizer::from_tsv("word\t\t\nbare\n").expect("lexicon");
        let tokens = tok.tokenize("word");
        assert_eq!(tokens[0].reading, None);
        assert_eq!(tokens[0].part_of_speech, None);
        assert_eq!(tok.len(), 2);
    }
}
