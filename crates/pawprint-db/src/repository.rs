//! Observable access to the entry store.

use chrono::{DateTime, Utc};
use pawprint_core::{Entry, EntryId};
use tokio::sync::watch;

use crate::{Database, DbError};

/// Entry store plus a change feed.
///
/// Subscribers hold a [`watch::Receiver`] over the full entry list, newest
/// first. The list is re-queried and published after every write that
/// changed a row, and on [`refresh`](Self::refresh).
pub struct EntryRepository {
    db: Database,
    feed: watch::Sender<Vec<Entry>>,
}

impl EntryRepository {
    /// Wraps an opened database and seeds the feed with its current entries.
    pub fn new(db: Database) -> Result<Self, DbError> {
        let entries = db.list_entries()?;
        let (feed, _) = watch::channel(entries);
        Ok(Self { db, feed })
    }

    /// Observes the ordered entry list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Entry>> {
        self.feed.subscribe()
    }

    /// Latest published entry list.
    pub fn entries(&self) -> Vec<Entry> {
        self.feed.borrow().clone()
    }

    pub fn get(&self, id: &EntryId) -> Result<Option<Entry>, DbError> {
        self.db.get_entry(id)
    }

    pub fn find_with_ids(&self, ids: &[EntryId]) -> Result<Vec<Entry>, DbError> {
        self.db.find_entries_with_ids(ids)
    }

    pub fn insert(&self, entry: &Entry) -> Result<(), DbError> {
        self.db.insert_entry(entry)?;
        self.publish()
    }

    /// Deletes an entry. Returns whether it existed.
    pub fn delete(&self, id: &EntryId) -> Result<bool, DbError> {
        let removed = self.db.delete_entry(id)?;
        if removed {
            self.publish()?;
        }
        Ok(removed)
    }

    pub fn delete_all(&self) -> Result<usize, DbError> {
        let removed = self.db.delete_all()?;
        if removed > 0 {
            self.publish()?;
        }
        Ok(removed)
    }

    /// Deletes `old` and inserts `new` atomically. Returns whether `old` existed.
    pub fn replace(&mut self, old: &EntryId, new: &Entry) -> Result<bool, DbError> {
        let replaced = self.db.replace_entry(old, new)?;
        if replaced {
            self.publish()?;
        }
        Ok(replaced)
    }

    pub fn prune_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DbError> {
        let removed = self.db.prune_before(cutoff)?;
        if removed > 0 {
            self.publish()?;
        }
        Ok(removed)
    }

    /// Forces observers to re-evaluate without touching stored data.
    pub fn refresh(&self) -> Result<(), DbError> {
        self.publish()
    }

    fn publish(&self) -> Result<(), DbError> {
        let entries = self.db.list_entries()?;
        tracing::trace!(count = entries.len(), "publishing entries");
        self.feed.send_replace(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Duration, TimeZone};
    use pawprint_core::EntryType;

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 7, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn repo() -> EntryRepository {
        EntryRepository::new(Database::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn new_seeds_feed_with_existing_entries() {
        let db = Database::open_in_memory().unwrap();
        let entry = Entry::at(EntryType::Feed, None, at(0));
        db.insert_entry(&entry).unwrap();

        let repo = EntryRepository::new(db).unwrap();
        let rx = repo.subscribe();
        assert_eq!(*rx.borrow(), vec![entry]);
    }

    #[test]
    fn insert_and_delete_publish() {
        let repo = repo();
        let mut rx = repo.subscribe();
        assert!(!rx.has_changed().unwrap());

        let entry = Entry::at(EntryType::Pee, None, at(5));
        repo.insert(&entry).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![entry.clone()]);

        assert!(repo.delete(&entry.id).unwrap());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn deleting_unknown_entry_does_not_publish() {
        let repo = repo();
        let mut rx = repo.subscribe();

        assert!(!repo.delete(&EntryId::new("missing").unwrap()).unwrap());
        assert_eq!(repo.delete_all().unwrap(), 0);
        assert!(!rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn refresh_notifies_without_writing() {
        let repo = repo();
        let entry = Entry::at(EntryType::Sleep, None, at(0));
        repo.insert(&entry).unwrap();

        let mut rx = repo.subscribe();
        rx.borrow_and_update();
        repo.refresh().unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![entry]);
        assert_eq!(repo.entries().len(), 1);
    }

    #[test]
    fn replace_publishes_new_ordering() {
        let mut repo = repo();
        let early = Entry::at(EntryType::Sleep, None, at(0));
        let late = Entry::at(EntryType::Wake, None, at(60));
        repo.insert(&early).unwrap();
        repo.insert(&late).unwrap();

        let moved = Entry {
            timestamp: at(120),
            ..early.clone()
        };
        let mut rx = repo.subscribe();
        assert!(repo.replace(&early.id, &moved).unwrap());

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![moved, late]);
    }

    #[test]
    fn delete_all_and_prune_publish() {
        let repo = repo();
        repo.insert(&Entry::at(EntryType::Feed, None, at(0))).unwrap();
        repo.insert(&Entry::at(EntryType::Feed, None, at(30))).unwrap();
        repo.insert(&Entry::at(EntryType::Feed, None, at(60))).unwrap();

        let mut rx = repo.subscribe();
        assert_eq!(repo.prune_before(at(15)).unwrap(), 1);
        assert_eq!(rx.borrow_and_update().len(), 2);

        assert_eq!(repo.delete_all().unwrap(), 2);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn lookups_pass_through() {
        let repo = repo();
        let a = Entry::at(EntryType::Pee, None, at(0));
        let b = Entry::at(EntryType::Poop, None, at(1));
        repo.insert(&a).unwrap();
        repo.insert(&b).unwrap();

        assert_eq!(repo.get(&a.id).unwrap(), Some(a.clone()));
        assert_eq!(
            repo.find_with_ids(&[a.id.clone(), b.id.clone()]).unwrap(),
            vec![b, a]
        );
    }
}
