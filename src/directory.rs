//! BIC directory records and the flattening step
//!
//! Projects the parsed ED807 document into a flat list of
//! (bank code, name, correspondent account) records. One directory entry
//! with N accounts yields N records sharing the entry's BIC and name; an
//! entry with no accounts yields none.

use crate::error::{Error, Result};
use crate::xml::Element;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One flattened directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BicRecord {
    /// Bank identification code
    pub bic: String,
    /// Participant display name
    pub name: String,
    /// Correspondent account number
    #[serde(rename = "corrAccount")]
    pub corr_account: String,
}

/// Flatten a parsed document into records.
///
/// Navigates document -> `ED807` -> `BICDirectoryEntry`. A document where
/// that path does not resolve produces an empty list rather than an error;
/// so does an individual entry without `Accounts` children. A missing
/// `ParticipantInfo` name is a hard schema error. The two policies are
/// deliberately different and both are load-bearing for callers.
pub fn flatten(document: &Element) -> Result<Vec<BicRecord>> {
    let Some(root) = document.first_child("ED807") else {
        debug!("document has no ED807 root, producing no records");
        return Ok(Vec::new());
    };

    let entries = root.children("BICDirectoryEntry");
    let mut records = Vec::new();

    for entry in entries {
        let bic = entry
            .attr("BIC")
            .ok_or(Error::Schema {
                bic: None,
                field: "BIC attribute",
            })?
            .to_string();

        let name = entry
            .first_child("ParticipantInfo")
            .ok_or_else(|| Error::Schema {
                bic: Some(bic.clone()),
                field: "ParticipantInfo",
            })?
            .attr("NameP")
            .ok_or_else(|| Error::Schema {
                bic: Some(bic.clone()),
                field: "NameP attribute",
            })?
            .to_string();

        // Zero accounts: entry contributes nothing, silently.
        for account in entry.children("Accounts") {
            let corr_account = account
                .attr("Account")
                .ok_or_else(|| Error::Schema {
                    bic: Some(bic.clone()),
                    field: "Account attribute",
                })?
                .to_string();

            records.push(BicRecord {
                bic: bic.clone(),
                name: name.clone(),
                corr_account,
            });
        }
    }

    debug!(count = records.len(), "directory flattened");
    Ok(records)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    fn flatten_str(xml: &str) -> Result<Vec<BicRecord>> {
        flatten(&parse_document(xml).unwrap())
    }

    #[test]
    fn entry_with_two_accounts_yields_two_records() {
        let records = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="044525225">
                   <ParticipantInfo NameP="СБЕРБАНК"/>
                   <Accounts Account="30101810400000000225"/>
                   <Accounts Account="30101810900000000746"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bic, "044525225");
        assert_eq!(records[0].name, "СБЕРБАНК");
        assert_eq!(records[0].corr_account, "30101810400000000225");
        assert_eq!(records[1].corr_account, "30101810900000000746");
        assert_eq!(records[1].bic, records[0].bic);
        assert_eq!(records[1].name, records[0].name);
    }

    #[test]
    fn singular_accounts_child_yields_one_record() {
        let records = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="044030790">
                   <ParticipantInfo NameP="БАНК"/>
                   <Accounts Account="30101810900000000790"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].corr_account, "30101810900000000790");
    }

    #[test]
    fn entry_without_accounts_is_silently_skipped() {
        let records = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="044525000">
                   <ParticipantInfo NameP="ГУ БАНКА РОССИИ"/>
                 </BICDirectoryEntry>
                 <BICDirectoryEntry BIC="044030790">
                   <ParticipantInfo NameP="БАНК"/>
                   <Accounts Account="30101810900000000790"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap();

        // the account-less entry contributes zero records, without error
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bic, "044030790");
    }

    #[test]
    fn missing_participant_info_is_a_schema_error() {
        let err = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="044525225">
                   <Accounts Account="30101810400000000225"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap_err();

        match err {
            Error::Schema { bic, field } => {
                assert_eq!(bic.as_deref(), Some("044525225"));
                assert_eq!(field, "ParticipantInfo");
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_name_attribute_is_a_schema_error() {
        let err = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="044525225">
                   <ParticipantInfo PtType="10"/>
                   <Accounts Account="30101810400000000225"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Schema {
                field: "NameP attribute",
                ..
            }
        ));
    }

    #[test]
    fn record_order_follows_document_order() {
        let records = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="A">
                   <ParticipantInfo NameP="Bank A"/>
                   <Accounts Account="A-acct1"/>
                   <Accounts Account="A-acct2"/>
                 </BICDirectoryEntry>
                 <BICDirectoryEntry BIC="B">
                   <ParticipantInfo NameP="Bank B"/>
                   <Accounts Account="B-acct1"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap();

        let accounts: Vec<&str> = records
            .iter()
            .map(|record| record.corr_account.as_str())
            .collect();
        assert_eq!(accounts, ["A-acct1", "A-acct2", "B-acct1"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let records = flatten_str(
            r#"<ED807>
                 <BICDirectoryEntry BIC="A">
                   <ParticipantInfo NameP="Bank A"/>
                   <Accounts Account="same"/>
                   <Accounts Account="same"/>
                 </BICDirectoryEntry>
               </ED807>"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn wrong_root_tag_yields_empty_list_not_an_error() {
        let records = flatten_str(r#"<SomethingElse Version="1"/>"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn ed807_without_entries_yields_empty_list() {
        let records = flatten_str(r#"<ED807 EDNo="1"/>"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn record_serializes_with_original_field_names() {
        let record = BicRecord {
            bic: "044525225".to_string(),
            name: "СБЕРБАНК".to_string(),
            corr_account: "30101810400000000225".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["bic"], "044525225");
        assert_eq!(json["name"], "СБЕРБАНК");
        assert_eq!(json["corrAccount"], "30101810400000000225");
    }
}
