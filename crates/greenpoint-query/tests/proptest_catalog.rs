// SPDX-License-Identifier: Apache-2.0

use greenpoint_model::{CategoryFilter, Project, ProjectId};
use greenpoint_query::{list_projects, resolve_project, PageRequest};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn catalog(n: usize) -> Vec<Project> {
    (1..=n as i64)
        .map(|id| Project::new(id * 10, format!("Project {id}")))
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn pages_partition_the_collection(
        n in 0_usize..40,
        limit in 1_usize..12
    ) {
        let projects = catalog(n);
        let first = list_projects(&projects, &CategoryFilter::Any, PageRequest::new(1, limit));
        let total_pages = first.meta.total_pages;
        prop_assert_eq!(total_pages, n.div_ceil(limit));

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            let slice = list_projects(&projects, &CategoryFilter::Any, PageRequest::new(page, limit));
            prop_assert!(slice.items.len() <= limit);
            prop_assert_eq!(slice.meta.has_more, page < total_pages);
            seen.extend(slice.items.into_iter().map(|item| item.id));
        }
        let expected: Vec<ProjectId> = projects.iter().map(|p| p.id).collect();
        prop_assert_eq!(seen, expected);

        let past = list_projects(&projects, &CategoryFilter::Any, PageRequest::new(total_pages + 1, limit));
        prop_assert!(past.items.is_empty());
        prop_assert!(!past.meta.has_more);
    }

    #[test]
    fn neighbors_wrap_around_storage_order(
        n in 1_usize..30,
        pick in 0_usize..30
    ) {
        let projects = catalog(n);
        let index = pick % n;
        let detail = resolve_project(&projects, projects[index].id).expect("present id resolves");
        prop_assert_eq!(detail.next_project.id, projects[(index + 1) % n].id);
        prop_assert_eq!(detail.prev_project.id, projects[(index + n - 1) % n].id);
    }
}
