/// Returned by a check-in request the portal did not accept
pub const CHECK_IN_FAILED_MESSAGE: &str = "Check-in failed";

/// Report status when the portal says today's check-in is already done
pub const ALREADY_CHECKED_IN_MESSAGE: &str = "Already checked in for today.";

/// Undo UTF-8 text that was decoded as Latin-1 on the way in
///
/// Every char must fit in one octet for the string to be a candidate; those
/// octets are then decoded as UTF-8. Anything else (already-correct CJK text,
/// octet sequences that are not UTF-8) is returned unchanged.
pub fn repair_mojibake(message: &str) -> String {
    let octets = message
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<Vec<u8>>>();

    match octets.map(String::from_utf8) {
        Some(Ok(repaired)) => repaired,
        _ => message.to_string(),
    }
}
