use crate::connections::GetConnection;
use crate::errors::Result;
use crate::queries;
use crate::structs::SavedLink;

use log::trace;
use rand::Rng;

pub trait LinkReader: GetConnection {
    #[inline]
    fn exists(&self, owner: u64, url: &str) -> Result<bool> {
        self.with_connection(|conn| {
            Ok(conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM articles WHERE user_id=(?1) AND url=(?2))",
                (queries::owner_key(owner), url),
                |row| row.get(0),
            )?)
        })
    }

    #[inline]
    fn count_links(&self, owner: u64) -> Result<u64> {
        self.with_connection(|conn| Ok(queries::count_links(conn, owner)?))
    }

    /// Picks one of the owner's links with uniform probability. The link stays
    /// stored, removing it is up to the caller once it has been delivered.
    #[inline]
    fn pick_random(&self, owner: u64) -> Result<Option<SavedLink>> {
        self.pick_random_with(owner, &mut rand::thread_rng())
    }

    fn pick_random_with<R: Rng>(
        &self,
        owner: u64,
        rng: &mut R,
    ) -> Result<Option<SavedLink>> {
        self.with_connection(|conn| {
            // count and fetch have to see the same rows, otherwise a removal in
            // between could push the offset past the end
            let tx = conn.transaction()?;
            let count = queries::count_links(&tx, owner)?;
            if count == 0 {
                return Ok(None);
            }

            let offset = rng.gen_range(0..count);
            trace!("picked offset {offset} of {count} links for owner {owner}");
            let link = queries::get_link_at(&tx, owner, offset)?;
            tx.commit()?;
            Ok(link)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AddOutcome, LinkReader, LinkStore, LinkWriter, Result, StoreConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn get_store() -> Result<LinkStore> {
        LinkStore::open(&StoreConfig::in_memory())
    }

    #[test]
    fn test_exists() -> Result<()> {
        let store = get_store()?;
        assert!(!store.exists(1, "https://a.com")?);

        store.add_link(1, "https://a.com")?;
        assert!(store.exists(1, "https://a.com")?);
        // urls are compared exactly
        assert!(!store.exists(1, "https://a.com/")?);
        assert!(!store.exists(2, "https://a.com")?);
        Ok(())
    }

    #[test]
    fn test_exists_after_remove() -> Result<()> {
        let store = get_store()?;
        store.add_link(1, "https://a.com")?;
        let link = store.pick_random(1)?.unwrap();
        store.remove_link(link.id, 1)?;

        assert!(!store.exists(1, "https://a.com")?);
        Ok(())
    }

    #[test]
    fn test_pick_empty() -> Result<()> {
        let store = get_store()?;
        assert!(store.pick_random(1)?.is_none());

        // another owner's links don't count
        store.add_link(2, "https://a.com")?;
        assert!(store.pick_random(1)?.is_none());
        Ok(())
    }

    #[test]
    fn test_pick_only_own_links() -> Result<()> {
        let store = get_store()?;
        store.add_link(1, "https://a.com")?;
        store.add_link(2, "https://b.com")?;
        store.add_link(2, "https://c.com")?;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let link = store.pick_random_with(1, &mut rng)?.unwrap();
            assert_eq!(link.owner, 1);
            assert_eq!(link.url, "https://a.com");
        }
        Ok(())
    }

    #[test]
    fn test_pick_does_not_remove() -> Result<()> {
        let store = get_store()?;
        store.add_link(1, "https://a.com")?;

        store.pick_random(1)?;
        store.pick_random(1)?;
        assert_eq!(store.count_links(1)?, 1);
        Ok(())
    }

    #[test]
    fn test_pick_uniform() -> Result<()> {
        const TRIALS: usize = 6000;
        let store = get_store()?;
        let urls = ["https://a.com", "https://b.com", "https://c.com"];
        for url in urls {
            assert_eq!(store.add_link(1, url)?, AddOutcome::Added);
        }

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let link = store.pick_random_with(1, &mut rng)?.unwrap();
            *counts.entry(link.url).or_insert(0) += 1;
        }

        // each url expects 2000 picks, allow a generous window around that
        assert_eq!(counts.len(), urls.len());
        for url in urls {
            let count = counts[url];
            assert!(
                (1700..=2300).contains(&count),
                "{url} picked {count} times out of {TRIALS}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_pick_two_urls_roughly_equal() -> Result<()> {
        const TRIALS: usize = 2000;
        let store = get_store()?;
        store.add_link(1, "https://a.com")?;
        store.add_link(1, "https://b.com")?;

        let mut a = 0;
        for _ in 0..TRIALS {
            if store.pick_random(1)?.unwrap().url == "https://a.com" {
                a += 1;
            }
        }

        assert!((800..=1200).contains(&a), "a.com picked {a} times out of {TRIALS}");
        Ok(())
    }

    #[test]
    fn test_count_links() -> Result<()> {
        let store = get_store()?;
        store.add_link(1, "https://a.com")?;
        store.add_link(1, "https://b.com")?;
        store.add_link(2, "https://a.com")?;

        assert_eq!(store.count_links(1)?, 2);
        assert_eq!(store.count_links(2)?, 1);
        assert_eq!(store.count_links(3)?, 0);
        Ok(())
    }
}
