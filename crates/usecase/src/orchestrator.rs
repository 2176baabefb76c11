use log::{debug, info};
use word_cloud_domain::{config::Config, model::WordCloud};
use word_cloud_ports::input::{ResolvedText, TextSource};

use crate::dto::WordCloudReport;

pub struct BuildWordCloud<'a> {
    source: &'a dyn TextSource,
}

impl<'a> BuildWordCloud<'a> {
    pub fn new(source: &'a dyn TextSource) -> Self {
        Self { source }
    }

    pub fn run(&self, config: &Config) -> WordCloudReport {
        let resolved = self.source.resolve(config.input());
        match &resolved {
            ResolvedText::File { path, .. } => info!("analysing file {}", path.display()),
            ResolvedText::Literal(_) => info!("analysing command-line text"),
        }

        let prefix = config.prefix().as_str();
        if !prefix.is_empty() {
            info!("only counting words starting with {prefix:?}");
        }

        let cloud = WordCloud::build(resolved.text(), &config.word_filter());
        let report = WordCloudReport::from_cloud(&cloud, config.counts());
        if !config.counts().is_unbounded() {
            debug!("{} of {} words within {:?}", report.entries.len(), report.distinct_words, config.counts());
        }
        report
    }
}
