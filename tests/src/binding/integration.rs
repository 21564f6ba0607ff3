use wifibind_common::network::Transport;
use wifibind_core::channel::{BIND_ERROR_CODE, BIND_ERROR_MESSAGE, BIND_TO_WIFI, MethodResult};

use crate::utils::{HostCall, ScriptedHost};

fn assert_bind_failed(result: &MethodResult, expected_details: &str) {
    match result {
        MethodResult::Error { code, message, details } => {
            assert_eq!(code, BIND_ERROR_CODE);
            assert_eq!(message, BIND_ERROR_MESSAGE);
            assert_eq!(details.as_deref(), Some(expected_details));
        }
        other => panic!("expected a bind failure, got {other:?}"),
    }
}

#[test]
fn cellular_only_fails() {
    let host = ScriptedHost::new().network("rmnet0", &[Transport::Cellular]);

    let result = host.channel().handle(BIND_TO_WIFI);

    assert_bind_failed(&result, "no WiFi network is available");
    assert!(host.bind_calls().is_empty());
}

#[test]
fn wifi_behind_cellular_is_bound() {
    let host = ScriptedHost::new()
        .network("rmnet0", &[Transport::Cellular])
        .network("wlan0", &[Transport::Wifi]);
    let channel = host.channel();

    assert_eq!(channel.handle(BIND_TO_WIFI), MethodResult::Success);
    assert_eq!(host.bind_calls(), vec![Some("wlan0".to_string())]);
    assert_eq!(channel.binder().bound_network(), Some(host.handle("wlan0")));
}

#[test]
fn first_wifi_wins_and_later_ones_are_not_inspected() {
    let host = ScriptedHost::new()
        .network("wlan0", &[Transport::Wifi])
        .network("wlan1", &[Transport::Wifi]);

    assert_eq!(host.channel().handle(BIND_TO_WIFI), MethodResult::Success);
    assert_eq!(
        host.calls(),
        vec![
            HostCall::SupportCheck,
            HostCall::Enumerate,
            HostCall::Capabilities("wlan0".to_string()),
            HostCall::Bind(Some("wlan0".to_string())),
        ]
    );
}

#[test]
fn empty_network_set_fails() {
    let host = ScriptedHost::new();

    let result = host.channel().handle(BIND_TO_WIFI);

    assert_bind_failed(&result, "no WiFi network is available");
    assert_eq!(host.calls(), vec![HostCall::SupportCheck, HostCall::Enumerate]);
}

#[test]
fn unsupported_host_is_never_enumerated() {
    let host = ScriptedHost::new().network("wlan0", &[Transport::Wifi]).unsupported();

    let result = host.channel().handle(BIND_TO_WIFI);

    assert_bind_failed(&result, "network binding is not supported on this platform");
    assert_eq!(host.calls(), vec![HostCall::SupportCheck]);
}

#[test]
fn failing_twice_looks_the_same() {
    let host = ScriptedHost::new()
        .network("eth0", &[Transport::Ethernet])
        .network("tun0", &[Transport::Vpn]);
    let channel = host.channel();

    let first = channel.handle(BIND_TO_WIFI);
    let calls_after_first = host.calls();
    let second = channel.handle(BIND_TO_WIFI);

    assert_eq!(first, second);
    assert!(host.bind_calls().is_empty());
    assert_eq!(host.calls().len(), calls_after_first.len() * 2);
    assert_eq!(channel.binder().bound_network(), None);
}

#[test]
fn unknown_commands_never_touch_the_host() {
    let host = ScriptedHost::new().network("wlan0", &[Transport::Wifi]);
    let channel = host.channel();

    for method in ["bindToWiFi", "unbind", "bindToWifi ", "networks"] {
        let result = channel.handle(method);
        assert_eq!(result, MethodResult::NotImplemented { method: method.to_string() });
        assert!(!result.is_success());
    }
    assert!(host.calls().is_empty());
}

/// Every arrangement of these transports binds the first WiFi network, or
/// fails without binding when there is none.
#[test]
fn selection_follows_enumeration_order() {
    let pool: [(&str, Transport); 4] = [
        ("rmnet0", Transport::Cellular),
        ("wlan0", Transport::Wifi),
        ("eth0", Transport::Ethernet),
        ("wlan1", Transport::Wifi),
    ];

    for mask in 0u8..16 {
        for rotation in 0..pool.len() {
            let mut host = ScriptedHost::new();
            let mut expected: Option<String> = None;
            for offset in 0..pool.len() {
                let idx = (rotation + offset) % pool.len();
                if mask & (1 << idx) == 0 {
                    continue;
                }
                let (name, transport) = pool[idx];
                host = host.network(name, &[transport]);
                if transport == Transport::Wifi && expected.is_none() {
                    expected = Some(name.to_string());
                }
            }

            let result = host.channel().handle(BIND_TO_WIFI);
            match expected {
                Some(name) => {
                    assert_eq!(result, MethodResult::Success, "mask {mask:04b} rotation {rotation}");
                    assert_eq!(host.bind_calls(), vec![Some(name)]);
                }
                None => {
                    assert!(!result.is_success(), "mask {mask:04b} rotation {rotation}");
                    assert!(host.bind_calls().is_empty());
                }
            }
        }
    }
}

#[test]
fn serve_keeps_answering_after_failures() {
    let host = ScriptedHost::new().network("rmnet0", &[Transport::Cellular]);
    let channel = host.channel();
    let mut output: Vec<u8> = Vec::new();

    let handled = channel
        .serve("bindToWifi\nscan\nbindToWifi\n".as_bytes(), &mut output)
        .unwrap();

    let reply = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(handled, 3);
    assert_eq!(
        lines,
        vec![
            "ERROR ERROR Failed to bind to WiFi network: no WiFi network is available",
            "NOT_IMPLEMENTED scan",
            "ERROR ERROR Failed to bind to WiFi network: no WiFi network is available",
        ]
    );
}
