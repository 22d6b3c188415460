/// Matches a text against a bag of query words.
///
/// Both the text and the query are tokenized with [`words`]: case is ignored
/// and anything that is not alphanumeric separates words. A query word
/// matches a text word if the text word starts with it, so `"unit"` matches
/// `"Unit"` and `"test"` matches `"testing!"`. An empty query matches any
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagOfWordsFilter {
    /// Every query word must match some word of the text.
    All,
    /// At least one query word must match some word of the text.
    Any,
}

impl BagOfWordsFilter {
    /// Returns true if the text matches the query.
    pub fn apply(&self, text: &str, query: &str) -> bool {
        self.apply_words(text, &words(query))
    }

    /// Returns true if the text matches the already tokenized query.
    pub fn apply_words(&self, text: &str, query_words: &[String]) -> bool {
        if query_words.is_empty() {
            return true;
        }

        let text_words = words(text);
        match self {
            BagOfWordsFilter::All => query_words
                .iter()
                .all(|qw| contains_word_starting_with(&text_words, qw)),
            BagOfWordsFilter::Any => query_words
                .iter()
                .any(|qw| contains_word_starting_with(&text_words, qw)),
        }
    }
}

fn contains_word_starting_with(words: &[String], word: &str) -> bool {
    words.iter().any(|w| w.starts_with(word))
}

/// Splits a text into lowercase words, treating any run of non-alphanumeric
/// characters as a separator.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a text into comma-separated groups and tokenizes each group with
/// [`words`]. Groups without any words are dropped.
pub fn word_groups(text: &str) -> Vec<Vec<String>> {
    text.split(',')
        .map(words)
        .filter(|group| !group.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_requires_every_query_word() {
        assert!(BagOfWordsFilter::All.apply("This is a  Unit\n testing!", "test,unit,is"));
        assert!(!BagOfWordsFilter::All.apply("This is a Unit test!", "testing unit is"));
        assert!(!BagOfWordsFilter::All.apply("testing", "detesting"));
        assert!(!BagOfWordsFilter::All.apply("This is a Unit test!", "test unit is not"));
        assert!(BagOfWordsFilter::All.apply(
            "This is not a LOVE song, but a Unit test!",
            "test unit is not love song"
        ));
        assert!(BagOfWordsFilter::All.apply("Repetition is the best training.", "repet repet best best"));
    }

    #[test]
    fn any_requires_one_query_word() {
        assert!(BagOfWordsFilter::Any.apply("This is a  Unit\n testing!", "test,unit,is"));
        assert!(!BagOfWordsFilter::Any.apply("This is a Unit test!", "testing"));
        assert!(!BagOfWordsFilter::Any.apply("testing", "detesting"));
        assert!(BagOfWordsFilter::Any.apply("This is a Unit test!", "test unit is not"));
    }

    #[test]
    fn punctuation_separates_words() {
        assert!(BagOfWordsFilter::All.apply("+7-(812)-212-85-06", "7 812 212 85 06"));
        assert!(!BagOfWordsFilter::All.apply("3.3", "33"));
        assert!(!BagOfWordsFilter::Any.apply("3.3", "33"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(BagOfWordsFilter::All.apply("Mühe", "MÜHE"));
        assert!(BagOfWordsFilter::Any.apply("Mühe", "MÜHE"));
    }

    #[test]
    fn empty_query_matches_anything() {
        assert!(BagOfWordsFilter::All.apply("EMPTY QUERY", ""));
        assert!(BagOfWordsFilter::All.apply("", ""));
        assert!(BagOfWordsFilter::Any.apply("EMPTY QUERY", ""));
        assert!(BagOfWordsFilter::Any.apply("", ""));
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert!(!BagOfWordsFilter::All.apply("", "EMPTY STRING"));
        assert!(!BagOfWordsFilter::Any.apply("", "EMPTY STRING"));
    }

    #[test]
    fn words_tokenizes() {
        assert_eq!(words(" Unit\n testing! "), vec!["unit", "testing"]);
        assert_eq!(words(""), Vec::<String>::new());
        assert_eq!(words("--"), Vec::<String>::new());
    }

    #[test]
    fn word_groups_split_on_commas() {
        assert_eq!(
            word_groups("New York, San Francisco,, "),
            vec![vec!["new", "york"], vec!["san", "francisco"]]
        );
        assert!(word_groups("").is_empty());
    }
}
