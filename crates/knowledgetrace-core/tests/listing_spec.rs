use knowledgetrace_core::*;
use serde_json::{json, Value};
use speculate2::speculate;

fn project(value: Value) -> Project {
    serde_json::from_value(value).expect("Invalid project fixture")
}

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.to_string()).collect()
}

speculate! {
    before {
        let projects = vec![
            project(json!({
                "id": "1", "title": "Beta", "techStack": ["Vue", "Go"], "tags": ["Web"],
                "supervisor": "Dr. Pham", "year": 2023, "status": "approved",
                "createdAt": "2023-04-01"
            })),
            project(json!({
                "id": "2", "title": "alpha", "techStack": ["vue"], "tags": ["AI", "web"],
                "supervisor": "Dr. Le", "year": "2024", "status": "approved",
                "createdAt": "2024-02-01"
            })),
            project(json!({
                "id": "3", "title": "Gamma", "techStack": ["Go"], "tags": ["Cloud"],
                "year": 2024, "status": "pending", "createdAt": "2024-03-01"
            })),
            project(json!({
                "id": "4", "title": "Delta", "tags": ["AI"], "status": "archived"
            })),
        ];
    }

    describe "browse" {
        it "shows only approved projects publicly, newest first" {
            let listing = browse(&projects, &FilterCriteria::default(), Visibility::Public);
            assert_eq!(ids(&listing), vec!["2", "1"]);
        }

        it "shows every status for review" {
            let listing = browse(&projects, &FilterCriteria::default(), Visibility::Review);
            assert_eq!(ids(&listing), vec!["3", "2", "1", "4"]);
        }

        it "applies the criteria and their sort key" {
            let criteria = FilterCriteria::default()
                .with_tech(["VUE"])
                .with_sort(SortKey::TitleAsc);
            let listing = browse(&projects, &criteria, Visibility::Public);
            assert_eq!(ids(&listing), vec!["2", "1"]);
        }

        it "matches the result of filtering then sorting by hand" {
            let criteria = FilterCriteria::default().with_year("2024").with_sort(SortKey::DateAsc);
            let manual = sort(filter(&projects, &criteria), criteria.sort_by);
            assert_eq!(ids(&browse(&projects, &criteria, Visibility::Review)), ids(&manual));
        }

        it "agrees with filtering the published projects by hand" {
            let criteria = FilterCriteria::default()
                .with_tech(["go", "vue"])
                .with_keywords("  ")
                .with_sort(SortKey::TitleDesc);
            let published: Vec<Project> = projects.iter().filter(|p| p.is_published()).cloned().collect();
            let manual = sort(filter(&published, &criteria), criteria.sort_by);
            assert_eq!(ids(&browse(&projects, &criteria, Visibility::Public)), ids(&manual));
        }
    }

    describe "facets" {
        it "collects distinct filter options" {
            let facets = facets(&projects);
            assert_eq!(facets.tech_stack, vec!["Go", "Vue"]);
            assert_eq!(facets.tags, vec!["AI", "Cloud", "Web"]);
            assert_eq!(facets.supervisors, vec!["Dr. Le", "Dr. Pham"]);
            assert_eq!(facets.years, vec!["2024", "2023"]);
        }

        it "can be restricted to a listing" {
            let public = browse(&projects, &FilterCriteria::default(), Visibility::Public);
            let facets = facets(public.iter().copied());
            // First spelling seen wins: project 2 lists "web" before project 1's "Web".
            assert_eq!(facets.tags, vec!["AI", "web"]);
        }
    }

    describe "status_summary" {
        it "counts projects per status" {
            let summary = status_summary(&projects);
            pretty_assertions::assert_eq!(summary, StatusSummary { approved: 2, pending: 1, rejected: 0, draft: 0, other: 1 });
            assert_eq!(summary.total(), 4);
        }
    }
}
