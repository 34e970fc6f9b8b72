use tickr_core::{
    FetchErrorKind, FinnhubAdapter, ProviderId, QuoteSource, Symbol, YahooAdapter,
};

/// One provider plus the fixtures describing its wire format.
struct ProviderCase {
    id: ProviderId,
    source: Box<dyn QuoteSource>,
    symbol_param: &'static str,
    known: &'static str,
    unknown: &'static str,
}

fn provider_cases() -> Vec<ProviderCase> {
    vec![
        ProviderCase {
            id: ProviderId::Finnhub,
            source: Box::new(FinnhubAdapter::default()),
            symbol_param: "symbol=AAPL",
            known: r#"{"c":150.0,"h":151.0,"l":147.5,"o":148.0,"pc":148.0,"t":1704067200}"#,
            unknown: r#"{"c":0,"h":0,"l":0,"o":0,"pc":0,"t":0}"#,
        },
        ProviderCase {
            id: ProviderId::Yahoo,
            source: Box::new(YahooAdapter::default()),
            symbol_param: "symbols=AAPL",
            known: r#"{"quoteResponse":{"result":[{"symbol":"AAPL","regularMarketPrice":150.0,
                "regularMarketOpen":148.0,"regularMarketDayHigh":151.0,"regularMarketDayLow":147.5,
                "regularMarketPreviousClose":148.0,"regularMarketTime":1704067200}],"error":null}}"#,
            unknown: r#"{"quoteResponse":{"result":[],"error":null}}"#,
        },
    ]
}

fn aapl() -> Symbol {
    Symbol::parse("AAPL").expect("valid symbol")
}

#[test]
fn every_provider_is_registered_under_its_id() {
    let ids = provider_cases()
        .iter()
        .map(|case| case.source.id())
        .collect::<Vec<_>>();
    assert_eq!(ids, ProviderId::ALL.to_vec());

    for case in provider_cases() {
        assert_eq!(case.source.id(), case.id);
    }
}

#[test]
fn request_is_a_single_https_get_addressing_the_symbol() {
    for case in provider_cases() {
        let request = case.source.quote_request(&aapl());
        assert!(
            request.url.starts_with("https://"),
            "provider '{}': default endpoint must use TLS",
            case.id
        );
        assert!(
            request.url.contains(case.symbol_param),
            "provider '{}': symbol parameter missing from {}",
            case.id,
            request.url
        );
        assert_eq!(request.timeout_ms, None, "provider '{}'", case.id);
    }
}

#[test]
fn known_payload_maps_to_the_same_quote_for_all_providers() {
    for case in provider_cases() {
        let quote = case
            .source
            .parse_quote(&aapl(), case.known)
            .unwrap_or_else(|error| panic!("provider '{}' parse failed: {error}", case.id));

        assert_eq!(quote.symbol, aapl(), "provider '{}'", case.id);
        assert_eq!(quote.price, 150.0, "provider '{}'", case.id);
        assert_eq!(quote.open, 148.0, "provider '{}'", case.id);
        assert_eq!(quote.day_high, 151.0, "provider '{}'", case.id);
        assert_eq!(quote.day_low, 147.5, "provider '{}'", case.id);
        assert_eq!(quote.previous_close, Some(148.0), "provider '{}'", case.id);
        assert_eq!(
            quote.as_of.map(|ts| ts.unix_seconds()),
            Some(1_704_067_200),
            "provider '{}'",
            case.id
        );
    }
}

#[test]
fn unknown_symbol_payload_is_not_found_for_all_providers() {
    for case in provider_cases() {
        let error = case
            .source
            .parse_quote(&aapl(), case.unknown)
            .expect_err("unknown symbol must fail");
        assert_eq!(error.kind(), FetchErrorKind::NotFound, "provider '{}'", case.id);
    }
}

#[test]
fn malformed_payloads_are_parse_errors_for_all_providers() {
    for case in provider_cases() {
        for body in ["", "{", "[1,2,3]", "\"quote\""] {
            let error = case
                .source
                .parse_quote(&aapl(), body)
                .expect_err("malformed payload must fail");
            assert_eq!(
                error.kind(),
                FetchErrorKind::Parse,
                "provider '{}' body {body:?}",
                case.id
            );
        }
    }
}
