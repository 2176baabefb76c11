use word_cloud_domain::{config::CountRange, model::WordCloud};

/// One printed line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub word: String,
    pub count: usize,
}

/// Alphabetically ordered words that survived the count range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCloudReport {
    pub entries: Vec<ReportEntry>,
    /// Distinct words counted before the count range was applied.
    pub distinct_words: usize,
}

impl WordCloudReport {
    pub fn from_cloud(cloud: &WordCloud, range: CountRange) -> Self {
        let entries = cloud
            .within(range)
            .map(|(word, n)| ReportEntry { word: word.to_owned(), count: n.value() })
            .collect();
        Self { entries, distinct_words: cloud.len() }
    }
}
