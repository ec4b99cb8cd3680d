//! Runs as its own test binary: `log::set_logger` is once-per-process, and a
//! fresh process is also the only place the logger defaults are observable.

#[test]
fn facade_records_route_through_the_global_logger() {
    assert_eq!(duolog::priority(), duolog::Priority::Info);
    assert_eq!(duolog::timestamp_format(), "%T  %d-%m-%Y");
    assert_eq!(duolog::filepath(), None);
    assert!(!duolog::is_file_output_enabled());

    let path = std::env::temp_dir().join(format!("duolog-facade-{}.log", std::process::id()));
    std::fs::remove_file(&path).ok();
    assert!(duolog::hook_log_facade());
    assert!(duolog::enable_file_output_to(&path));

    log::warn!("via the facade");
    duolog::set_priority(duolog::Priority::Error);
    log::info!("filtered out");
    log::error!("or routed");

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[WARN ]     via the facade"));
    assert!(!text.contains("filtered out"));
    assert!(text.contains("[ERROR]     or routed"));
}
