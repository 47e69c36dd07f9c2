//! Region Catalog - the per-panel substitution tables.
//!
//! Static configuration data: every UI region of the hosting notes app
//! as a declarative [`Region`](crate::engine::Region) record with its
//! Japanese string table. The engine itself carries none of these
//! literals; [`mount`](crate::pipeline::mount) registers the whole
//! catalog through the one observe primitive.
//!
//! Selector strings here are the de facto contract with the hosting
//! page's markup; they break silently when the host changes its class
//! names, which is an accepted property of the retrofit approach.

mod dialogs;
mod footer;
mod menus;
mod navigation;
mod preferences;

use crate::engine::Region;

/// Every region in registration order.
pub fn all_regions() -> Vec<Region> {
    let mut regions = Vec::new();
    regions.extend(navigation::regions());
    regions.extend(menus::regions());
    regions.extend(preferences::regions());
    regions.extend(dialogs::regions());
    regions.extend(footer::regions());
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_builds() {
        // Region::new parses every selector; a malformed one panics here
        // rather than in production paths.
        let regions = all_regions();
        assert!(regions.len() >= 25);
    }

    #[test]
    fn test_region_names_unique() {
        let regions = all_regions();
        let names: HashSet<&str> = regions.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), regions.len());
    }

    #[test]
    fn test_regions_have_work_to_do() {
        for region in all_regions() {
            assert!(
                !region.map.is_empty() || !region.rules.is_empty(),
                "region {} substitutes nothing",
                region.name
            );
            assert!(!region.selectors.is_empty());
        }
    }
}
