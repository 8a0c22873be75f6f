use super::*;

#[test]
fn host_error_messages() {
    assert_eq!(HostError::NoWindow.to_string(), "no global window");
    assert_eq!(HostError::NoDocument.to_string(), "window has no document");
    assert_eq!(HostError::ContextUnavailable.to_string(), "canvas 2d context unavailable");
}

#[test]
fn host_error_js_carries_message() {
    let err = HostError::Js("TypeError: x is undefined".into());
    assert_eq!(err.to_string(), "javascript error: TypeError: x is undefined");
}
