mod oracle;
mod properties;

/// Install a logger for the test binary. Safe to call from every test;
/// only the first call has any effect.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Compile `pattern` and check it against every `(input, expected)` pair,
/// reporting all mismatches at once.
fn check(pattern: &str, cases: &[(&str, bool)]) -> anyhow::Result<()> {
    init_logging();
    let compiled = regex_fsm::compile(pattern)?;
    let failures: Vec<String> = cases
        .iter()
        .filter(|&&(input, expected)| compiled.matches(input) != expected)
        .map(|&(input, expected)| {
            format!("pattern {:?}, input {:?}: expected {}", pattern, input, expected)
        })
        .collect();
    if !failures.is_empty() {
        anyhow::bail!("{} failure(s):\n{}", failures.len(), failures.join("\n"));
    }
    Ok(())
}
