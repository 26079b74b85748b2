use std::io::Write;

use apps_config::EndpointOption;

use crate::error::CliError;

/// Format one option and write it as a single line.
///
/// TSV columns: kind, text, text_by, value, info, dnslink. `kind` is
/// `header`, `dev-header` or `entry`; absent optional fields are `-`.
pub fn write_option<W: Write>(
    option: &EndpointOption,
    json_mode: bool,
    buf: &mut String,
    writer: &mut W,
) -> Result<(), CliError> {
    buf.clear();

    if json_mode {
        buf.push_str(&serde_json::to_string(option)?);
    } else {
        buf.push_str(kind(option));
        buf.push('\t');
        buf.push_str(&option.text);
        buf.push('\t');
        buf.push_str(&option.text_by);
        buf.push('\t');
        buf.push_str(&option.value);
        buf.push('\t');
        buf.push_str(option.info.as_deref().unwrap_or("-"));
        buf.push('\t');
        buf.push_str(option.dnslink.as_deref().unwrap_or("-"));
    }

    buf.push('\n');
    writer.write_all(buf.as_bytes())?;

    Ok(())
}

/// Write every option, reusing one line buffer.
pub fn write_options<W: Write>(
    options: &[EndpointOption],
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    let mut buf = String::with_capacity(128);
    for option in options {
        write_option(option, json_mode, &mut buf, writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn kind(option: &EndpointOption) -> &'static str {
    match (option.is_header(), option.is_development()) {
        (true, true) => "dev-header",
        (true, false) => "header",
        (false, _) => "entry",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(options: &[EndpointOption], json: bool) -> String {
        let mut out = Vec::new();
        write_options(options, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tsv_entry() {
        let option = EndpointOption::entry("Polkadot", "hosted by Parity", "wss://rpc.polkadot.io")
            .with_info("polkadot")
            .with_dnslink("polkadot");
        assert_eq!(
            render(&[option], false),
            "entry\tPolkadot\thosted by Parity\twss://rpc.polkadot.io\tpolkadot\tpolkadot\n"
        );
    }

    #[test]
    fn test_tsv_headers() {
        let options = vec![
            EndpointOption::header("Live networks"),
            EndpointOption::header("Development").development(),
        ];
        assert_eq!(
            render(&options, false),
            "header\tLive networks\t\t\t-\t-\ndev-header\tDevelopment\t\t\t-\t-\n"
        );
    }

    #[test]
    fn test_json_lines() {
        let options = vec![
            EndpointOption::header("Live networks"),
            EndpointOption::entry("Custom", "ws://foo:9944", "ws://foo:9944").with_info("local"),
        ];
        let out = render(&options, true);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"text":"Live networks","textBy":"","value":"","isHeader":true}"#
        );
        let parsed: EndpointOption = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.value, "ws://foo:9944");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], false), "");
    }
}
