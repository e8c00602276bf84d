//! End-to-end properties of the listen-interface parser/printer pair.

use listenconf::{
    parse_listen_interfaces, print_listen_interfaces, ListenInterface,
};

fn iface(device: &str, port: u16, ssl: bool) -> ListenInterface {
    ListenInterface {
        device: device.to_string(),
        port,
        ssl,
    }
}

#[test]
fn print_then_parse_is_identity() {
    // device texts free of ',' ':' '[' ']' and whitespace round-trip exactly
    let cases: Vec<Vec<ListenInterface>> = vec![
        vec![],
        vec![iface("eth0", 6881, false)],
        vec![iface("::1", 6881, false), iface("127.0.0.1", 443, true)],
        vec![
            iface("example.com", 0, false),
            iface("0.0.0.0", 65535, true),
            iface("fe80::1", 8080, false),
            iface("wlan0", 1, true),
        ],
    ];

    for entries in cases {
        let printed = print_listen_interfaces(&entries);
        assert_eq!(
            parse_listen_interfaces(&printed),
            entries,
            "round-trip failed for {printed:?}"
        );
    }
}

#[test]
fn parse_then_print_is_canonical_form() {
    // parsing tolerates whitespace the printer never emits
    let parsed = parse_listen_interfaces(" eth0 : 6881 ,[::1]: 443 s");
    assert_eq!(print_listen_interfaces(&parsed), "eth0:6881,[::1]:443s");
}

#[test]
fn out_of_range_ports_never_surface() {
    for input in [
        "eth0:65536",
        "eth0:99999",
        "eth0:123456",
        "eth0:",
        "eth0:000065",
    ] {
        assert!(
            parse_listen_interfaces(input).is_empty(),
            "{input:?} should produce no entries"
        );
    }
}

#[test]
fn hard_stop_and_per_entry_drop_are_distinct() {
    // missing colon: the whole parse aborts, the valid second entry is lost
    assert!(parse_listen_interfaces("eth0 6881,eth1:6881").is_empty());

    // invalid port: only the offending entry is dropped
    assert_eq!(
        parse_listen_interfaces("eth0:6881,eth1:99999"),
        vec![iface("eth0", 6881, false)]
    );
}

#[test]
fn display_matches_printer() {
    let entries = [iface("::1", 6881, true), iface("eth0", 80, false)];
    let joined = entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(joined, print_listen_interfaces(&entries));
}

#[test]
fn serde_json_round_trip() {
    let entries = vec![iface("::1", 6881, true), iface("eth0", 80, false)];
    let json = serde_json::to_string(&entries).unwrap();
    let back: Vec<ListenInterface> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entries);
}

#[test]
fn ssl_flag_defaults_to_false_in_json() {
    let iface: ListenInterface =
        serde_json::from_str(r#"{"device":"eth0","port":6881}"#).unwrap();
    assert!(!iface.ssl);
}
