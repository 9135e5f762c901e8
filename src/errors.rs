// Error messages are "<Kind>: <condition>" so clients can surface both.

// ── NotAuthorized ──
pub const ERR_NOT_ADMIN: &str = "NotAuthorized: caller is not the admin";
pub const ERR_NOT_CONTRIBUTOR: &str = "NotAuthorized: caller is not an eligible contributor";
pub const ERR_NOT_ORACLE: &str = "NotAuthorized: caller is not the decryption oracle";
pub const ERR_ZERO_ADDRESS: &str = "NotAuthorized: zero address cannot be assigned a role";

// ── Paused ──
pub const ERR_PAUSED: &str = "Paused: ledger is paused";

// ── CooldownActive ──
pub const ERR_SUBMISSION_COOLDOWN: &str = "CooldownActive: submission cooldown has not elapsed";
pub const ERR_DECRYPTION_COOLDOWN: &str =
    "CooldownActive: decryption request cooldown has not elapsed";
pub const ERR_REQUEST_NOT_EXPIRED: &str =
    "CooldownActive: decryption request has not timed out yet";

// ── InvalidBatch ──
pub const ERR_BATCH_NOT_FOUND: &str = "InvalidBatch: batch does not exist";
pub const ERR_BATCH_NOT_OPEN: &str = "InvalidBatch: batch is not open";
pub const ERR_BATCH_NOT_CLOSED: &str = "InvalidBatch: batch is not closed";
pub const ERR_UNKNOWN_REQUEST: &str = "InvalidBatch: unknown decryption request";
pub const ERR_NOT_REVEALED: &str = "InvalidBatch: batch totals have not been revealed";
pub const ERR_ALREADY_REVEALED: &str = "InvalidBatch: batch totals already revealed";

// ── ReplayAttempt ──
pub const ERR_REPLAY: &str = "ReplayAttempt: decryption request already processed";

// ── StateMismatch ──
pub const ERR_STATE_MISMATCH: &str =
    "StateMismatch: accumulators changed since decryption was requested";

// ── DecryptionFailed ──
pub const ERR_PROOF_REJECTED: &str = "DecryptionFailed: oracle rejected the decryption proof";
pub const ERR_MALFORMED_CLEARTEXTS: &str = "DecryptionFailed: malformed cleartext payload";
pub const ERR_REQUEST_ID_REUSED: &str = "DecryptionFailed: oracle returned a request id in use";
