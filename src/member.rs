// 👤 Member Record - Row Transformer
// One CSV row in, one app-ready member out

use serde::{Deserialize, Serialize};

use crate::rules::{branch_from_text, credits_from_text, phone_last4, Branch};

// ============================================================================
// COLUMN LAYOUT
// ============================================================================

/// Member export columns (zero-based). The export has no stable header
/// names, so fields are read by position only.
pub mod columns {
    pub const BRANCH: usize = 0;
    pub const NAME: usize = 1;
    pub const PHONE: usize = 7;
    pub const SUBJECT: usize = 18;
    pub const REG_DATE: usize = 24; // 등록일자
    pub const END_DATE: usize = 25; // 만기일자

    /// Rows shorter than this are skipped
    pub const MIN_FIELDS: usize = 26;
}

/// First identifier handed out; later ones count up from here
pub const ID_OFFSET: usize = 10000;

// ============================================================================
// OUTPUT RECORD
// ============================================================================

/// MigratedMember - Normalized member ready for the app's data store
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigratedMember {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub phone_last4: String,

    /// Purchased plan, free text
    pub subject: String,
    pub credits: u64,
    pub home_branch: Branch,

    // Dates are passed through untouched
    pub reg_date: String,
    pub start_date: String,
    pub end_date: String,

    // Not present in the export
    pub amount: i64,
    pub last_attended: String,
}

/// Why a row produced no member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooShort,
    MissingName,
}

/// Transform one row into a member
///
/// `accepted` is how many members were produced before this row; it decides
/// the id, so skipped rows leave no gaps.
///
/// # Returns
/// * `Ok(MigratedMember)` - Row accepted
/// * `Err(SkipReason)` - Row skipped (short row, then empty name)
pub fn transform_row<S: AsRef<str>>(
    row: &[S],
    accepted: usize,
) -> Result<MigratedMember, SkipReason> {
    if row.len() < columns::MIN_FIELDS {
        return Err(SkipReason::TooShort);
    }

    let name = row[columns::NAME].as_ref();
    if name.is_empty() {
        return Err(SkipReason::MissingName);
    }

    let phone = row[columns::PHONE].as_ref();
    let subject = row[columns::SUBJECT].as_ref();
    let reg_date = row[columns::REG_DATE].as_ref();

    Ok(MigratedMember {
        id: (ID_OFFSET + accepted).to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        phone_last4: phone_last4(phone),
        subject: subject.to_string(),
        credits: credits_from_text(subject),
        home_branch: branch_from_text(row[columns::BRANCH].as_ref()),
        reg_date: reg_date.to_string(),
        // Start = registration for migrated members
        start_date: reg_date.to_string(),
        end_date: row[columns::END_DATE].as_ref().to_string(),
        amount: 0,
        last_attended: String::new(),
    })
}
