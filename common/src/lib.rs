pub use eyre::Result;
use itertools::Itertools;
use log::debug;
use std::{collections::HashMap, fmt::Debug};

/// Word -> number of occurrences. Iteration order is unspecified.
pub type Frequencies = HashMap<String, usize>;

pub trait App: Debug + Send + Sync {
    /// Splits `contents` into the keys to be counted, in input order.
    fn map(&self, contents: &str) -> Vec<String>;

    fn reduce(&self, keys: Vec<String>) -> Frequencies {
        let mut freq = Frequencies::new();
        for key in keys {
            *freq.entry(key).or_insert(0) += 1;
        }
        freq
    }
}

pub fn run(app: &dyn App, contents: &str) -> Frequencies {
    let keys = app.map(contents);
    debug!("{:?} mapped {} bytes into {} keys", app, contents.len(), keys.len());

    let freq = app.reduce(keys);
    debug!("{:?} reduced into {} distinct keys", app, freq.len());
    freq
}

/// Entries in lexicographic key order, for deterministic output.
pub fn sorted(freq: &Frequencies) -> Vec<(&str, usize)> {
    freq.iter()
        .map(|(k, &v)| (k.as_str(), v))
        .sorted()
        .collect_vec()
}

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init()
}
