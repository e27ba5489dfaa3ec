/*
 * Responsibility
 * - the single access predicate for memory records
 * - handlers ask "may subject do X to this record" here, never inline
 */
use uuid::Uuid;

use crate::repos::memory_repo::MemoryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Modify,
}

/// Ownership rules:
/// - a public record is readable by any authenticated subject
/// - a private record is readable only by its owner
/// - only the owner may modify or delete, public or not
pub fn can_access(record: &MemoryRecord, subject: Uuid, mode: AccessMode) -> bool {
    match mode {
        AccessMode::Read => record.is_public || record.user_id == subject,
        AccessMode::Modify => record.user_id == subject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(owner: Uuid, is_public: bool) -> MemoryRecord {
        MemoryRecord {
            id: Uuid::new_v4(),
            user_id: owner,
            content: "content".into(),
            cover_url: "https://cdn.test/cover.png".into(),
            type_media: "image".into(),
            is_public,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn owner_can_read_and_modify_private_record() {
        let owner = Uuid::new_v4();
        let r = record(owner, false);
        assert!(can_access(&r, owner, AccessMode::Read));
        assert!(can_access(&r, owner, AccessMode::Modify));
    }

    #[test]
    fn non_owner_cannot_touch_private_record() {
        let r = record(Uuid::new_v4(), false);
        let stranger = Uuid::new_v4();
        assert!(!can_access(&r, stranger, AccessMode::Read));
        assert!(!can_access(&r, stranger, AccessMode::Modify));
    }

    #[test]
    fn public_record_is_readable_but_not_writable_by_non_owner() {
        let r = record(Uuid::new_v4(), true);
        let stranger = Uuid::new_v4();
        assert!(can_access(&r, stranger, AccessMode::Read));
        assert!(!can_access(&r, stranger, AccessMode::Modify));
    }
}
