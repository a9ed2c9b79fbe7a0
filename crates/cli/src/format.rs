//! Report formatters.
//!
//! Responsibilities:
//! - Render a single zone request as a labelled multi-line report.
//! - Render a collection of zone requests as a tab-separated table.
//!
//! Does NOT handle:
//! - Fetching data or writing to stdout (see `report`).
//!
//! Invariants:
//! - Formatters are pure functions over the models; absent or zero data
//!   degrades to an empty-string rendering, never an error.
//! - Output is deterministic for a given input, byte for byte.

use chrono::{DateTime, Utc};
use czds_client::{RequestInfo, ZoneRequest};

/// Timestamp layout used in reports, e.g. `Thu Oct  3 19:32:37 2019`.
/// The day of month is space-padded to two characters.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Render a timestamp for display.
///
/// Only timestamps strictly after the Unix epoch are rendered; `None` and
/// placeholder values at or before the epoch come out as the empty string.
pub fn ansic_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(t) if t.timestamp() > 0 => t.format(TIMESTAMP_FORMAT).to_string(),
        _ => String::new(),
    }
}

/// Render the full detail report for a single zone request.
pub fn format_request_info(info: &RequestInfo) -> String {
    let (tld_name, unicode_name) = match &info.tld {
        Some(tld) => (tld.name.as_str(), tld.unicode_name.as_str()),
        None => ("", ""),
    };

    let mut output = String::new();
    output.push_str(&format!("ID:\t{}\n", info.request_id));
    output.push_str(&format!("TLD:\t{} ({})\n", tld_name, unicode_name));
    output.push_str(&format!("Status:\t{}\n", info.status));
    output.push_str(&format!("Created:\t{}\n", ansic_timestamp(info.created)));
    output.push_str(&format!("Updated:\t{}\n", ansic_timestamp(info.last_updated)));
    output.push_str(&format!("Expires:\t{}\n", ansic_timestamp(info.expires)));
    output.push_str(&format!("AutoRenew:\t{}\n", info.auto_renew));
    output.push_str(&format!("Extensible:\t{}\n", info.extensible));
    output.push_str(&format!("ExtensionInProcess:\t{}\n", info.extension_in_process));
    output.push_str(&format!("Cancellable:\t{}\n", info.cancellable));
    output.push_str(&format!("Request IP:\t{}\n", info.request_ip));
    output.push_str(&format!("FTP IPs:\t{:?}\n", info.ftp_ips));
    output.push_str(&format!("Reason:\t{}\n", info.reason));
    output.push_str("History:\n");
    for event in &info.history {
        output.push_str(&format!(
            "\t{}\t{}\n",
            ansic_timestamp(event.timestamp),
            event.action
        ));
    }
    output
}

/// Render the tab-separated listing of zone requests.
///
/// An empty collection renders as the empty string; the header line is
/// only emitted when there is at least one row.
pub fn format_request_listing(requests: &[ZoneRequest]) -> String {
    if requests.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str("TLD\tID\tUnicodeTLD\tStatus\tCreated\tUpdated\tExpires\tSFTP\n");
    for request in requests {
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            request.tld,
            request.request_id,
            request.unicode_tld,
            request.status,
            ansic_timestamp(request.created),
            ansic_timestamp(request.last_updated),
            ansic_timestamp(request.expires),
            request.sftp
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use czds_client::{HistoryEntry, TldInfo};
    use proptest::prelude::*;

    fn utc(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_timestamp_single_digit_day_is_space_padded() {
        let rendered = ansic_timestamp(Some(utc(1_570_131_157)));
        assert_eq!(rendered, "Thu Oct  3 19:32:37 2019");
    }

    #[test]
    fn test_timestamp_double_digit_day() {
        let rendered = ansic_timestamp(Some(Utc.with_ymd_and_hms(2021, 12, 25, 7, 5, 0).unwrap()));
        assert_eq!(rendered, "Sat Dec 25 07:05:00 2021");
    }

    #[test]
    fn test_timestamp_none_renders_empty() {
        assert_eq!(ansic_timestamp(None), "");
    }

    #[test]
    fn test_timestamp_epoch_and_earlier_render_empty() {
        assert_eq!(ansic_timestamp(Some(utc(0))), "");
        assert_eq!(ansic_timestamp(Some(utc(-1))), "");
    }

    fn sample_info() -> RequestInfo {
        RequestInfo {
            request_id: "3a2b1c".to_string(),
            tld: Some(TldInfo {
                name: "example".to_string(),
                unicode_name: "example".to_string(),
            }),
            status: "Approved".to_string(),
            created: Some(utc(1_570_131_157)),
            last_updated: Some(Utc.with_ymd_and_hms(2021, 12, 25, 7, 5, 0).unwrap()),
            expires: None,
            auto_renew: false,
            extensible: true,
            extension_in_process: false,
            cancellable: true,
            request_ip: "203.0.113.8".to_string(),
            ftp_ips: vec!["198.51.100.1".to_string(), "198.51.100.2".to_string()],
            reason: "Research".to_string(),
            history: vec![
                HistoryEntry {
                    timestamp: Some(utc(1_570_131_157)),
                    action: "Request submitted".to_string(),
                },
                HistoryEntry {
                    timestamp: Some(Utc.with_ymd_and_hms(2021, 12, 25, 7, 5, 0).unwrap()),
                    action: "Request approved".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_detail_report_layout() {
        let expected = "ID:\t3a2b1c\n\
                        TLD:\texample (example)\n\
                        Status:\tApproved\n\
                        Created:\tThu Oct  3 19:32:37 2019\n\
                        Updated:\tSat Dec 25 07:05:00 2021\n\
                        Expires:\t\n\
                        AutoRenew:\tfalse\n\
                        Extensible:\ttrue\n\
                        ExtensionInProcess:\tfalse\n\
                        Cancellable:\ttrue\n\
                        Request IP:\t203.0.113.8\n\
                        FTP IPs:\t[\"198.51.100.1\", \"198.51.100.2\"]\n\
                        Reason:\tResearch\n\
                        History:\n\
                        \tThu Oct  3 19:32:37 2019\tRequest submitted\n\
                        \tSat Dec 25 07:05:00 2021\tRequest approved\n";
        assert_eq!(format_request_info(&sample_info()), expected);
    }

    #[test]
    fn test_detail_report_epoch_expiry_and_history_order() {
        let mut info = sample_info();
        info.expires = Some(utc(0));
        info.auto_renew = true;

        let report = format_request_info(&info);
        assert!(report.contains("Expires:\t\n"));
        assert!(report.contains("AutoRenew:\ttrue\n"));

        let submitted = report.find("Request submitted").unwrap();
        let approved = report.find("Request approved").unwrap();
        assert!(submitted < approved);
    }

    #[test]
    fn test_detail_report_without_tld_block() {
        let mut info = sample_info();
        info.tld = None;
        let report = format_request_info(&info);
        assert!(report.contains("TLD:\t ()\n"));
    }

    #[test]
    fn test_detail_report_empty_history_keeps_header() {
        let mut info = sample_info();
        info.history.clear();
        let report = format_request_info(&info);
        assert!(report.ends_with("History:\n"));
    }

    fn sample_row(tld: &str, id: &str) -> ZoneRequest {
        ZoneRequest {
            request_id: id.to_string(),
            tld: tld.to_string(),
            unicode_tld: tld.to_string(),
            status: "Approved".to_string(),
            created: Some(utc(1_570_131_157)),
            last_updated: Some(utc(1_570_131_157)),
            expires: None,
            sftp: false,
        }
    }

    #[test]
    fn test_listing_empty_is_empty_string() {
        assert_eq!(format_request_listing(&[]), "");
    }

    #[test]
    fn test_listing_rows_preserve_order() {
        let rows = vec![
            sample_row("aaa", "r-1"),
            sample_row("bbb", "r-2"),
            sample_row("ccc", "r-3"),
        ];
        let listing = format_request_listing(&rows);

        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "TLD\tID\tUnicodeTLD\tStatus\tCreated\tUpdated\tExpires\tSFTP"
        );
        assert_eq!(
            lines[1],
            "aaa\tr-1\taaa\tApproved\tThu Oct  3 19:32:37 2019\tThu Oct  3 19:32:37 2019\t\tfalse"
        );
        assert!(lines[2].starts_with("bbb\tr-2\t"));
        assert!(lines[3].starts_with("ccc\tr-3\t"));
    }

    #[test]
    fn test_listing_sftp_column_is_lowercase_bool() {
        let mut row = sample_row("example", "r-1");
        row.sftp = true;
        let listing = format_request_listing(&[row]);
        assert!(listing.ends_with("\ttrue\n"));
    }

    /// Upper bound for generated timestamps (2100-01-01T00:00:00Z).
    const MAX_TIMESTAMP: i64 = 4_102_444_800;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Rendered timestamps must reparse to the same instant.
        #[test]
        fn rendered_timestamp_roundtrips(secs in 1..=MAX_TIMESTAMP) {
            let original = utc(secs);
            let rendered = ansic_timestamp(Some(original));
            prop_assert!(!rendered.is_empty());

            let reparsed =
                chrono::NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT);
            prop_assert!(reparsed.is_ok(), "'{}' did not reparse: {:?}", rendered, reparsed.err());
            prop_assert_eq!(reparsed.unwrap().and_utc(), original);
        }

        /// Non-positive timestamps always render empty.
        #[test]
        fn non_positive_timestamp_renders_empty(secs in -MAX_TIMESTAMP..=0i64) {
            prop_assert_eq!(ansic_timestamp(Some(utc(secs))), "");
        }
    }
}
