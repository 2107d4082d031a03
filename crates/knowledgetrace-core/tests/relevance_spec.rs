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
        let a = project(json!({
            "id": "1", "title": "A", "techStack": ["React", "Node"], "tags": ["Web"],
            "supervisor": "Dr.X", "status": "approved"
        }));
        let b = project(json!({
            "id": "2", "title": "B", "techStack": ["React"], "tags": [],
            "supervisor": "Dr.Y", "status": "approved"
        }));
        let c = project(json!({
            "id": "3", "title": "C", "techStack": [], "tags": ["Web"],
            "supervisor": "Dr.X", "status": "approved"
        }));
        let d = project(json!({
            "id": "4", "title": "D", "techStack": ["React", "Node"], "tags": ["Web"],
            "supervisor": "Dr.X", "status": "pending"
        }));
        let candidates = vec![a.clone(), b, c, d];
    }

    describe "related_to" {
        it "ranks approved relatives with ties in input order" {
            let related = related_to(&a, &candidates, 5);
            assert_eq!(ids(&related), vec!["2", "3"]);
        }

        it "reports the scores behind the ranking" {
            let ranked = rank_related(&a, &candidates, 5);
            let scores: Vec<u32> = ranked.iter().map(|s| s.score).collect();
            assert_eq!(scores, vec![3, 3]);
        }

        it "never includes the reference itself" {
            let related = related_to(&a, &candidates, 10);
            assert!(related.iter().all(|p| p.id != a.id));
        }

        it "excludes unapproved candidates however well they match" {
            let related = related_to(&a, &candidates, 10);
            assert!(related.iter().all(|p| p.id.as_str() != "4"));
        }

        it "caps the result at the limit" {
            assert_eq!(ids(&related_to(&a, &candidates, 1)), vec!["2"]);
            assert!(related_to(&a, &candidates, 0).is_empty());
        }

        it "defaults to three results" {
            assert_eq!(DEFAULT_RELATED_LIMIT, 3);
        }
    }

    describe "scoring" {
        it "ranks shared tech above shared tag and supervisor" {
            let reference = project(json!({
                "id": "r", "title": "R", "techStack": ["React", "Node"], "tags": ["Web"],
                "supervisor": "Dr. A", "status": "approved"
            }));
            let weak = project(json!({
                "id": "weak", "title": "W", "tags": ["web"], "supervisor": "dr. a",
                "status": "approved"
            }));
            let strong = project(json!({
                "id": "strong", "title": "S", "techStack": ["node", "REACT"],
                "status": "approved"
            }));
            let candidates = vec![weak, strong];

            let ranked = rank_related(&reference, &candidates, 5);
            assert_eq!(ranked[0].project.id.as_str(), "strong");
            assert_eq!(ranked[0].score, 6);
            assert_eq!(ranked[1].project.id.as_str(), "weak");
            assert_eq!(ranked[1].score, 3);
        }

        it "drops unrelated candidates even when the limit allows more" {
            let reference = project(json!({
                "id": "r", "title": "R", "techStack": ["Rust"], "status": "approved"
            }));
            let candidates = vec![
                project(json!({ "id": "x", "title": "X", "techStack": ["Go"], "status": "approved" })),
                project(json!({ "id": "y", "title": "Y", "techStack": ["rust"], "status": "approved" })),
            ];
            assert_eq!(ids(&related_to(&reference, &candidates, 10)), vec!["y"]);
        }

        it "gives no supervisor bonus for blank supervisors on hand-built records" {
            let mut reference = Project::new(ProjectId::new("r").unwrap(), "R");
            reference.supervisor = Some("  ".to_string());
            let mut candidate = Project::new(ProjectId::new("c").unwrap(), "C");
            candidate.supervisor = Some(String::new());
            candidate.status = ProjectStatus::Approved;

            assert_eq!(score(&reference, &candidate), 0);
            let candidates = vec![candidate];
            assert!(related_to(&reference, &candidates, 5).is_empty());
        }

        it "ignores the reference's own status" {
            let reference = project(json!({
                "id": "r", "title": "R", "techStack": ["Rust"], "status": "draft"
            }));
            let candidates = vec![
                project(json!({ "id": "y", "title": "Y", "techStack": ["Rust"], "status": "approved" })),
            ];
            assert_eq!(related_to(&reference, &candidates, 3).len(), 1);
        }
    }
}
