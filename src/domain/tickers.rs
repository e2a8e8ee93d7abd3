//! Ticker list resolution.
//!
//! An explicit argument wins, then the `DEFAULT_TICKERS` environment variable
//! (which also switches the run to the decoupled celery engine), then the
//! configured default symbol.

use crate::ports::env_port::EnvPort;

pub const DEFAULT_TICKERS_VAR: &str = "DEFAULT_TICKERS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerSource {
    Argument,
    Environment,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSelection {
    /// Space-separated ticker list as passed to the tool.
    pub tickers: String,
    pub source: TickerSource,
    pub celery: bool,
}

impl TickerSelection {
    pub fn count(&self) -> usize {
        self.tickers.split_whitespace().count()
    }
}

/// Convert a comma-separated list into a space-separated one.
///
/// Tokens are trimmed and empty tokens dropped, so `"AAPL, MSFT,"` becomes
/// `"AAPL MSFT"`.
pub fn normalize_ticker_list(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn resolve_tickers(
    argument: Option<&str>,
    env: &dyn EnvPort,
    default_ticker: &str,
) -> TickerSelection {
    if let Some(arg) = argument.filter(|a| !a.trim().is_empty()) {
        return TickerSelection {
            tickers: arg.to_string(),
            source: TickerSource::Argument,
            celery: false,
        };
    }

    if let Some(raw) = env.non_empty(DEFAULT_TICKERS_VAR) {
        let tickers = normalize_ticker_list(&raw);
        if !tickers.is_empty() {
            return TickerSelection {
                tickers,
                source: TickerSource::Environment,
                celery: true,
            };
        }
        log::warn!("{DEFAULT_TICKERS_VAR}={raw:?} holds no tickers, using default");
    }

    TickerSelection {
        tickers: default_ticker.to_string(),
        source: TickerSource::Default,
        celery: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    struct MapEnv(HashMap<String, String>);

    impl MapEnv {
        fn with(pairs: &[(&str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl EnvPort for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn path(&self) -> Option<OsString> {
            None
        }
    }

    #[test]
    fn normalizes_comma_list() {
        assert_eq!(normalize_ticker_list("AAPL,MSFT"), "AAPL MSFT");
        assert_eq!(normalize_ticker_list(" AAPL , MSFT ,,NFLX,"), "AAPL MSFT NFLX");
        assert_eq!(normalize_ticker_list("SPY"), "SPY");
        assert_eq!(normalize_ticker_list(",,"), "");
    }

    #[test]
    fn default_when_nothing_set() {
        let sel = resolve_tickers(None, &MapEnv::with(&[]), "SPY");
        assert_eq!(sel.tickers, "SPY");
        assert_eq!(sel.source, TickerSource::Default);
        assert!(!sel.celery);
    }

    #[test]
    fn env_list_enables_celery() {
        let env = MapEnv::with(&[("DEFAULT_TICKERS", "AAPL,MSFT")]);
        let sel = resolve_tickers(None, &env, "SPY");
        assert_eq!(sel.tickers, "AAPL MSFT");
        assert_eq!(sel.count(), 2);
        assert!(sel.celery);
    }

    #[test]
    fn argument_beats_env() {
        let env = MapEnv::with(&[("DEFAULT_TICKERS", "AAPL,MSFT")]);
        let sel = resolve_tickers(Some("TSLA"), &env, "SPY");
        assert_eq!(sel.tickers, "TSLA");
        assert_eq!(sel.source, TickerSource::Argument);
        assert!(!sel.celery);
    }

    #[test]
    fn blank_argument_is_ignored() {
        let sel = resolve_tickers(Some("  "), &MapEnv::with(&[]), "SPY");
        assert_eq!(sel.source, TickerSource::Default);
    }

    #[test]
    fn empty_env_value_counts_as_unset() {
        let env = MapEnv::with(&[("DEFAULT_TICKERS", "")]);
        let sel = resolve_tickers(None, &env, "SPY");
        assert_eq!(sel.tickers, "SPY");
        assert!(!sel.celery);
    }

    #[test]
    fn separators_only_falls_back_to_default() {
        let env = MapEnv::with(&[("DEFAULT_TICKERS", " , ,")]);
        let sel = resolve_tickers(None, &env, "QQQ");
        assert_eq!(sel.tickers, "QQQ");
        assert!(!sel.celery);
    }

    proptest! {
        #[test]
        fn normalized_list_has_no_commas_or_padding(raw in "[A-Z ,]{0,40}") {
            let out = normalize_ticker_list(&raw);
            prop_assert!(!out.contains(','));
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn normalizing_twice_is_stable(symbols in proptest::collection::vec("[A-Z]{1,5}", 1..8)) {
            let once = normalize_ticker_list(&symbols.join(","));
            prop_assert_eq!(&once, &symbols.join(" "));
            prop_assert_eq!(normalize_ticker_list(&once.replace(' ', ",")), once);
        }
    }
}
