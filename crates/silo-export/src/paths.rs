use std::collections::HashSet;

/// Used-path set for a single export run.
///
/// The only cross-resource shared state in the pipeline. Allocation is a
/// pure lookup; the caller registers the returned path itself, keeping
/// allocation and commit together at each call site.
#[derive(Debug, Default)]
pub struct PathRegistry {
    used: HashSet<String>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a filename unique within `folder` for this run.
    ///
    /// Tries `base.ext`, then `base_1.ext`, `base_2.ext`, … against the
    /// registered set. Does not register the result.
    pub fn next_available(&self, folder: &str, base: &str, ext: &str) -> String {
        let mut candidate = format!("{folder}/{base}.{ext}");
        let mut n: u32 = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{folder}/{base}_{n}.{ext}");
            n += 1;
        }
        candidate
    }

    /// Mark a full path as taken. Returns false if it already was.
    pub fn register(&mut self, path: String) -> bool {
        self.used.insert(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_allocation_is_unsuffixed() {
        let registry = PathRegistry::new();
        assert_eq!(registry.next_available("work", "Report", "pdf"), "work/Report.pdf");
    }

    #[test]
    fn collisions_count_up_from_one() {
        let mut registry = PathRegistry::new();
        for expected in ["work/Report.pdf", "work/Report_1.pdf", "work/Report_2.pdf"] {
            let path = registry.next_available("work", "Report", "pdf");
            assert_eq!(path, expected);
            assert!(registry.register(path));
        }
    }

    #[test]
    fn folders_do_not_share_collisions() {
        let mut registry = PathRegistry::new();
        registry.register("work/Report.pdf".into());
        assert_eq!(registry.next_available("home", "Report", "pdf"), "home/Report.pdf");
    }

    #[test]
    fn allocation_without_register_repeats() {
        let registry = PathRegistry::new();
        assert_eq!(
            registry.next_available("work", "Report", "pdf"),
            registry.next_available("work", "Report", "pdf")
        );
    }
}
