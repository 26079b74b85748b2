//! The endpoints shown in the RPC dropdown.
//!
//! For the most part (with the exception of Polkadot) the lists hold live
//! chains only, with RPCs hosted by the community or chain vendor:
//!   info:  chain logo name
//!   text:  label shown in the dropdown
//!   value: hosted secure websocket endpoint

use tracing::{debug, error};

use crate::config::{NAMESPACE, WS_URL_VAR};
use crate::env::EnvProvider;
use crate::i18n::{TOptions, Translate};
use crate::storage::{load_custom_endpoints, Storage};
use crate::types::EndpointOption;

fn ns() -> TOptions {
    TOptions::ns(NAMESPACE)
}

fn hosted_by(t: &dyn Translate, host: &str) -> String {
    t.t("rpc.hosted.by", "hosted by {{host}}", &ns().replace("host", host))
}

/// Entries for the endpoints the user saved, read from storage.
///
/// Malformed stored data is logged and yields no entries.
pub fn create_own(t: &dyn Translate, storage: &dyn Storage) -> Vec<EndpointOption> {
    let endpoints = match load_custom_endpoints(storage) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            error!(error = %e, "ignoring malformed custom endpoints");
            return Vec::new();
        }
    };

    endpoints
        .into_iter()
        .map(|text_by| {
            EndpointOption::entry(
                t.t("rpc.custom.entry", "Custom", &ns()),
                text_by.clone(),
                text_by,
            )
            .with_info("local")
        })
        .collect()
}

pub fn create_dev(t: &dyn Translate) -> Vec<EndpointOption> {
    vec![EndpointOption::entry(
        t.t("rpc.local", "Local Node", &ns()),
        "127.0.0.1:9944",
        "ws://127.0.0.1:9944",
    )
    .with_dnslink("local")
    .with_info("local")]
}

pub fn create_live_networks(t: &dyn Translate) -> Vec<EndpointOption> {
    vec![
        // fixed, polkadot
        EndpointOption::entry(
            t.t("rpc.polkadot.parity", "Polkadot", &ns()),
            hosted_by(t, "Parity"),
            "wss://rpc.polkadot.io",
        )
        .with_dnslink("polkadot")
        .with_info("polkadot"),
        EndpointOption::entry(
            t.t("rpc.polkadot.w3f", "Polkadot", &ns()),
            hosted_by(t, "Web3 Foundation"),
            "wss://cc1-1.polkadot.network",
        )
        .with_info("polkadot"),
        EndpointOption::entry(
            t.t("rpc.kusama.parity", "Kusama", &ns()),
            hosted_by(t, "Parity"),
            "wss://kusama-rpc.polkadot.io",
        )
        .with_dnslink("kusama")
        .with_info("kusama"),
        EndpointOption::entry(
            t.t("rpc.kusama.w3f", "Kusama", &ns()),
            hosted_by(t, "Web3 Foundation"),
            "wss://cc3-5.kusama.network",
        )
        .with_info("kusama"),
        // retired, kept for reference
        EndpointOption::entry(
            t.t("rpc.kusama.ava", "Kusama", &ns()),
            t.t(
                "rpc.ava.summary",
                "user-run public nodes; see https://status.cloud.ava.do/",
                &ns(),
            ),
            "wss://kusama.polkadot.cloud.ava.do",
        )
        .with_info("kusama")
        .disabled(),
    ]
}

pub fn create_test_networks(t: &dyn Translate) -> Vec<EndpointOption> {
    vec![EndpointOption::entry(
        t.t("rpc.advanca", "Advanca PoC", &ns()),
        hosted_by(t, "Advanca Network"),
        "ws://127.0.0.1:9944",
    )]
}

/// Header plus entry for the `WS_URL` override, if one is set.
pub fn create_custom(t: &dyn Translate, env: &dyn EnvProvider) -> Vec<EndpointOption> {
    let Some(ws_url) = env.ws_url() else {
        return Vec::new();
    };

    vec![
        EndpointOption::header(t.t("rpc.custom", "Custom environment", &ns())),
        EndpointOption::entry(
            t.t(
                "rpc.custom.entry",
                "Custom {{WS_URL}}",
                &ns().replace(WS_URL_VAR, ws_url.as_str()),
            ),
            ws_url.clone(),
            ws_url,
        )
        .with_info(WS_URL_VAR),
    ]
}

/// Build the full dropdown list.
///
/// Order: custom environment, live networks, test networks, development,
/// then the user's saved endpoints (no header). Disabled entries are dropped.
pub fn create(
    t: &dyn Translate,
    env: &dyn EnvProvider,
    storage: &dyn Storage,
) -> Vec<EndpointOption> {
    let mut options = create_custom(t, env);

    options.push(EndpointOption::header(t.t(
        "rpc.header.live",
        "Live networks",
        &ns(),
    )));
    options.extend(create_live_networks(t));

    options.push(EndpointOption::header(t.t(
        "rpc.header.test",
        "Test networks",
        &ns(),
    )));
    options.extend(create_test_networks(t));

    options.push(EndpointOption::header(t.t("rpc.header.dev", "Development", &ns())).development());
    options.extend(create_dev(t));

    options.extend(create_own(t, storage));

    let total = options.len();
    options.retain(|option| !option.is_disabled());
    debug!(total, shown = options.len(), "endpoint list built");

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CUSTOM_ENDPOINT_KEY;
    use crate::env::StaticEnv;
    use crate::i18n::DefaultTranslator;
    use crate::storage::MemoryStorage;

    // ---- sub-builders ----

    #[test]
    fn test_create_custom_absent() {
        assert!(create_custom(&DefaultTranslator, &StaticEnv::none()).is_empty());
        assert!(create_custom(&DefaultTranslator, &StaticEnv::some("")).is_empty());
    }

    #[test]
    fn test_create_custom_present() {
        let options = create_custom(&DefaultTranslator, &StaticEnv::some("ws://env:9944"));
        assert_eq!(options.len(), 2);
        assert!(options[0].is_header());
        assert_eq!(options[0].text, "Custom environment");
        assert_eq!(options[1].text, "Custom ws://env:9944");
        assert_eq!(options[1].text_by, "ws://env:9944");
        assert_eq!(options[1].value, "ws://env:9944");
        assert_eq!(options[1].info.as_deref(), Some("WS_URL"));
    }

    #[test]
    fn test_live_networks_keep_soft_disabled_entry() {
        let live = create_live_networks(&DefaultTranslator);
        assert_eq!(live.len(), 5);
        let disabled: Vec<_> = live.iter().filter(|o| o.is_disabled()).collect();
        assert_eq!(disabled.len(), 1);
        assert_eq!(disabled[0].value, "wss://kusama.polkadot.cloud.ava.do");
    }

    #[test]
    fn test_live_networks_hosted_by() {
        let live = create_live_networks(&DefaultTranslator);
        assert_eq!(live[0].text, "Polkadot");
        assert_eq!(live[0].text_by, "hosted by Parity");
        assert_eq!(live[0].dnslink.as_deref(), Some("polkadot"));
        assert_eq!(live[1].text_by, "hosted by Web3 Foundation");
        assert!(live[1].dnslink.is_none());
    }

    #[test]
    fn test_test_networks() {
        let test = create_test_networks(&DefaultTranslator);
        assert_eq!(test.len(), 1);
        assert_eq!(test[0].text, "Advanca PoC");
        assert_eq!(test[0].text_by, "hosted by Advanca Network");
        assert_eq!(test[0].value, "ws://127.0.0.1:9944");
    }

    #[test]
    fn test_create_dev() {
        let dev = create_dev(&DefaultTranslator);
        assert_eq!(dev.len(), 1);
        assert_eq!(dev[0].dnslink.as_deref(), Some("local"));
        assert_eq!(dev[0].text, "Local Node");
        assert_eq!(dev[0].text_by, "127.0.0.1:9944");
        assert_eq!(dev[0].value, "ws://127.0.0.1:9944");
    }

    #[test]
    fn test_create_own_entries() {
        let storage =
            MemoryStorage::with_item(CUSTOM_ENDPOINT_KEY, r#"["ws://foo:9944","wss://bar"]"#);
        let own = create_own(&DefaultTranslator, &storage);
        assert_eq!(own.len(), 2);
        assert_eq!(own[0].text, "Custom");
        assert_eq!(own[0].text_by, "ws://foo:9944");
        assert_eq!(own[0].value, "ws://foo:9944");
        assert_eq!(own[0].info.as_deref(), Some("local"));
        assert_eq!(own[1].value, "wss://bar");
    }

    #[test]
    fn test_create_own_malformed_is_empty() {
        let storage = MemoryStorage::with_item(CUSTOM_ENDPOINT_KEY, "not-json");
        assert!(create_own(&DefaultTranslator, &storage).is_empty());
    }

    #[test]
    fn test_create_own_absent_is_empty() {
        assert!(create_own(&DefaultTranslator, &MemoryStorage::new()).is_empty());
    }

    // ---- assembly ----

    #[test]
    fn test_create_default_layout() {
        let options = create(&DefaultTranslator, &StaticEnv::none(), &MemoryStorage::new());
        let texts: Vec<_> = options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Live networks",
                "Polkadot",
                "Polkadot",
                "Kusama",
                "Kusama",
                "Test networks",
                "Advanca PoC",
                "Development",
                "Local Node",
            ]
        );
        assert!(options[7].is_development());
        assert!(options[7].is_header());
    }

    #[test]
    fn test_create_translates_with_namespace() {
        let t = |key: &str, default: &str, opts: &TOptions| {
            assert_eq!(opts.ns, "apps-config");
            if key == "rpc.header.live" {
                "Produktivnetze".to_string()
            } else {
                default.to_string()
            }
        };
        let options = create(&t, &StaticEnv::none(), &MemoryStorage::new());
        assert_eq!(options[0].text, "Produktivnetze");
    }
}
