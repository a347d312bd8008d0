//! Aggregation builder.
//!
//! Turns the already-grouped payloads of the two listing endpoints into typed
//! catalogs ([`build_by_term`], [`build_by_teacher`]) and projects those into
//! presentation trees ([`term_tree`], [`teacher_tree`]).
//!
//! The two views are independent projections. They share the category level
//! shape but nothing else is unified.
//!
//! The builder only reads its input. Calling it twice with the same payload
//! yields equal output.

use serde::Deserialize;
use serde_json::Value;

use crate::entities::{
    CatalogByTeacher, CatalogByTerm, Category, CategoryTests, Discipline, DisciplineCatalog,
    EntityRef, Teacher, TeacherCatalog, TeacherListedTest, Term, TermCatalog, TermListedTest,
};
use crate::errors::AggregationError;
use crate::payload::{CategoryEntry, NameRef, TeacherGroup, TermGroup};
use crate::tree::{CatalogTree, GroupKind, NodeKind, TreeNode};

pub const EMPTY_TERM: &str = "No tests for this term...";
pub const EMPTY_DISCIPLINE: &str = "No tests for this discipline...";
pub const EMPTY_CATEGORY: &str = "No tests in this category...";
pub const EMPTY_TEACHER: &str = "No tests for this instructor...";

// ── Payload validation ─────────────────────────────────────────────

/// Validate a `testsByTerms` payload and build the term catalog.
///
/// Terms are ordered by `number`; every nested level keeps backend order.
///
/// # Errors
///
/// Returns [`AggregationError::Shape`] if the payload does not match the
/// by-term nesting, or [`AggregationError::InvalidId`] if any entity has id 0.
pub fn build_by_term(payload: &Value) -> Result<CatalogByTerm, AggregationError> {
    let groups = Vec::<TermGroup>::deserialize(payload).map_err(|source| {
        AggregationError::Shape {
            view: "by-term",
            source,
        }
    })?;

    let mut terms = Vec::with_capacity(groups.len());
    for (t, group) in groups.into_iter().enumerate() {
        let path = format!("terms[{t}]");
        check_id("term", group.id, &path)?;

        let mut disciplines = Vec::with_capacity(group.disciplines.len());
        for (d, discipline) in group.disciplines.into_iter().enumerate() {
            let path = format!("{path}.disciplines[{d}]");
            let discipline_id = discipline.id;
            check_id("discipline", discipline_id, &path)?;

            let categories = build_categories(discipline.categories, &path, |test, category_id| {
                TermListedTest {
                    id: test.id,
                    name: test.name,
                    pdf_url: test.pdf_url,
                    category_id,
                    discipline_id,
                    teacher: entity_ref(test.teacher),
                }
            })?;

            disciplines.push(DisciplineCatalog {
                discipline: Discipline {
                    id: discipline_id,
                    name: discipline.name,
                    term_id: group.id,
                },
                categories,
            });
        }

        terms.push(TermCatalog {
            term: Term {
                id: group.id,
                number: group.number,
            },
            disciplines,
        });
    }

    terms.sort_by_key(|entry| entry.term.number);
    let catalog = CatalogByTerm { terms };
    tracing::debug!(
        terms = catalog.terms.len(),
        tests = catalog.test_count(),
        "built by-term catalog"
    );
    Ok(catalog)
}

/// Validate a `testsByTeachers` payload and build the teacher catalog.
///
/// Teachers keep backend order.
///
/// # Errors
///
/// Returns [`AggregationError::Shape`] if the payload does not match the
/// by-teacher nesting, or [`AggregationError::InvalidId`] if any entity has id 0.
pub fn build_by_teacher(payload: &Value) -> Result<CatalogByTeacher, AggregationError> {
    let groups = Vec::<TeacherGroup>::deserialize(payload).map_err(|source| {
        AggregationError::Shape {
            view: "by-teacher",
            source,
        }
    })?;

    let mut teachers = Vec::with_capacity(groups.len());
    for (t, group) in groups.into_iter().enumerate() {
        let path = format!("teachers[{t}]");
        let teacher_id = group.id;
        check_id("teacher", teacher_id, &path)?;

        let categories = build_categories(group.categories, &path, |test, category_id| {
            TeacherListedTest {
                id: test.id,
                name: test.name,
                pdf_url: test.pdf_url,
                category_id,
                teacher_id,
                discipline: entity_ref(test.discipline),
            }
        })?;

        teachers.push(TeacherCatalog {
            teacher: Teacher {
                id: teacher_id,
                name: group.name,
            },
            categories,
        });
    }

    let catalog = CatalogByTeacher { teachers };
    tracing::debug!(
        teachers = catalog.teachers.len(),
        tests = catalog.test_count(),
        "built by-teacher catalog"
    );
    Ok(catalog)
}

/// Shared category level. `listed` maps a raw test record to its listed form
/// given the owning category id.
fn build_categories<R, T, F>(
    entries: Vec<CategoryEntry<R>>,
    parent_path: &str,
    mut listed: F,
) -> Result<Vec<CategoryTests<T>>, AggregationError>
where
    R: ListedRecord,
    F: FnMut(R, u32) -> T,
{
    let mut categories = Vec::with_capacity(entries.len());
    for (c, entry) in entries.into_iter().enumerate() {
        let group = entry.category;
        let path = format!("{parent_path}.categories[{c}]");
        check_id("category", group.id, &path)?;

        let mut tests = Vec::with_capacity(group.tests.len());
        for (i, test) in group.tests.into_iter().enumerate() {
            let test_path = format!("{path}.tests[{i}]");
            check_id("test", test.id(), &test_path)?;
            if let Some(id) = test.ref_id() {
                check_id(test.ref_entity(), id, &test_path)?;
            }
            tests.push(listed(test, group.id));
        }

        categories.push(CategoryTests {
            category: Category {
                id: group.id,
                name: group.name,
            },
            tests,
        });
    }
    Ok(categories)
}

/// Raw test record of either view: its own id plus the id of the entity it
/// is annotated with, when the backend sent one.
trait ListedRecord {
    fn id(&self) -> u32;
    fn ref_id(&self) -> Option<u32>;
    fn ref_entity(&self) -> &'static str;
}

impl ListedRecord for crate::payload::TermTestRecord {
    fn id(&self) -> u32 {
        self.id
    }
    fn ref_id(&self) -> Option<u32> {
        self.teacher.id
    }
    fn ref_entity(&self) -> &'static str {
        "teacher"
    }
}

impl ListedRecord for crate::payload::TeacherTestRecord {
    fn id(&self) -> u32 {
        self.id
    }
    fn ref_id(&self) -> Option<u32> {
        self.discipline.id
    }
    fn ref_entity(&self) -> &'static str {
        "discipline"
    }
}

fn check_id(entity: &'static str, id: u32, path: &str) -> Result<(), AggregationError> {
    if id == crate::UNSET_ID {
        return Err(AggregationError::InvalidId {
            entity,
            path: path.to_string(),
        });
    }
    Ok(())
}

fn entity_ref(raw: NameRef) -> EntityRef {
    EntityRef {
        id: raw.id,
        name: raw.name,
    }
}

// ── Presentation projection ────────────────────────────────────────

/// Project the term catalog into a tree: term -> discipline -> category -> test.
#[must_use]
pub fn term_tree(catalog: &CatalogByTerm) -> CatalogTree {
    let roots = catalog
        .terms
        .iter()
        .map(|entry| {
            let disciplines = entry
                .disciplines
                .iter()
                .map(|discipline| {
                    let categories = discipline
                        .categories
                        .iter()
                        .map(|category| {
                            category_node(category, |test| {
                                TreeNode::leaf(
                                    NodeKind::Test,
                                    test.id,
                                    format!("{} ({})", test.name, test.teacher.name),
                                    Some(test.pdf_url.clone()),
                                )
                            })
                        })
                        .collect();
                    group_node(
                        GroupKind::Discipline,
                        discipline.discipline.id,
                        discipline.discipline.name.clone(),
                        categories,
                        EMPTY_DISCIPLINE,
                    )
                })
                .collect();
            group_node(
                GroupKind::Term,
                entry.term.id,
                term_label(&entry.term),
                disciplines,
                EMPTY_TERM,
            )
        })
        .collect();

    CatalogTree { roots }
}

/// Project the teacher catalog into a tree: teacher -> category -> test.
#[must_use]
pub fn teacher_tree(catalog: &CatalogByTeacher) -> CatalogTree {
    let roots = catalog
        .teachers
        .iter()
        .map(|entry| {
            let categories = entry
                .categories
                .iter()
                .map(|category| {
                    category_node(category, |test| {
                        TreeNode::leaf(
                            NodeKind::Test,
                            test.id,
                            format!("{} ({})", test.name, test.discipline.name),
                            Some(test.pdf_url.clone()),
                        )
                    })
                })
                .collect();
            group_node(
                GroupKind::Teacher,
                entry.teacher.id,
                entry.teacher.name.clone(),
                categories,
                EMPTY_TEACHER,
            )
        })
        .collect();

    CatalogTree { roots }
}

/// Display label of a term.
#[must_use]
pub fn term_label(term: &Term) -> String {
    format!("{}º term", term.number)
}

fn category_node<T>(category: &CategoryTests<T>, test_node: impl Fn(&T) -> TreeNode) -> TreeNode {
    group_node(
        GroupKind::Category,
        category.category.id,
        category.category.name.clone(),
        category.tests.iter().map(test_node).collect(),
        EMPTY_CATEGORY,
    )
}

/// A group node. Zero children renders a single placeholder instead of
/// dropping the branch.
fn group_node(
    kind: GroupKind,
    id: u32,
    label: String,
    children: Vec<TreeNode>,
    empty_text: &str,
) -> TreeNode {
    if children.is_empty() {
        let mut node = TreeNode::group(kind, id, label, Vec::new());
        node.children.push(TreeNode::leaf(
            NodeKind::Placeholder { of: kind },
            id,
            empty_text.to_string(),
            None,
        ));
        return node;
    }
    TreeNode::group(kind, id, label, children)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::tree::NodeKey;

    fn term_payload() -> Value {
        json!([
            {
                "id": 2,
                "number": 2,
                "disciplines": []
            },
            {
                "id": 1,
                "number": 1,
                "disciplines": [
                    {
                        "id": 3,
                        "name": "Calc",
                        "categories": [
                            {
                                "category": {
                                    "id": 7,
                                    "name": "Final",
                                    "tests": [
                                        {"id": 11, "name": "P1", "pdfUrl": "http://x/p1.pdf", "teacher": {"name": "Ana"}}
                                    ]
                                }
                            },
                            {"category": {"id": 8, "name": "Midterm", "tests": []}}
                        ]
                    },
                    {"id": 4, "name": "Bio", "categories": []}
                ]
            }
        ])
    }

    fn teacher_payload() -> Value {
        json!([
            {
                "id": 10,
                "name": "Ana",
                "categories": [
                    {
                        "category": {
                            "id": 7,
                            "name": "Final",
                            "tests": [
                                {"id": 11, "name": "P1", "pdfUrl": "http://x/p1.pdf", "discipline": {"name": "Calc"}},
                                {"id": 12, "name": "P2", "pdfUrl": "http://x/p2.pdf", "discipline": {"id": 4, "name": "Bio"}}
                            ]
                        }
                    }
                ]
            },
            {"id": 20, "name": "Bruno", "categories": []}
        ])
    }

    #[test]
    fn terms_sharing_a_number_keep_backend_order() {
        let payload = json!([
            {"id": 5, "number": 2, "disciplines": []},
            {"id": 9, "number": 1, "disciplines": []},
            {"id": 3, "number": 2, "disciplines": []},
            {"id": 4, "number": 1, "disciplines": []}
        ]);

        let catalog = build_by_term(&payload).unwrap();

        let ids: Vec<u32> = catalog.terms.iter().map(|t| t.term.id).collect();
        assert_eq!(ids, vec![9, 4, 5, 3]);
    }

    #[test]
    fn by_term_orders_terms_by_number_and_propagates_parent_ids() {
        let catalog = build_by_term(&term_payload()).unwrap();

        let numbers: Vec<u32> = catalog.terms.iter().map(|t| t.term.number).collect();
        assert_eq!(numbers, vec![1, 2]);

        let calc = &catalog.terms[0].disciplines[0];
        assert_eq!(calc.discipline.term_id, 1);
        let test = &calc.categories[0].tests[0];
        assert_eq!(test.category_id, 7);
        assert_eq!(test.discipline_id, 3);
        assert_eq!(test.teacher.name, "Ana");
        assert_eq!(catalog.test_count(), 1);
    }

    #[test]
    fn by_term_keeps_empty_levels() {
        let catalog = build_by_term(&term_payload()).unwrap();
        assert!(catalog.terms[1].disciplines.is_empty());
        assert!(catalog.terms[0].disciplines[1].categories.is_empty());
        assert!(catalog.terms[0].disciplines[0].categories[1].tests.is_empty());
    }

    #[test]
    fn by_term_rejects_absent_level() {
        let payload = json!([{"id": 1, "number": 1}]);
        let err = build_by_term(&payload).unwrap_err();
        assert!(matches!(err, AggregationError::Shape { view: "by-term", .. }));
    }

    #[test]
    fn by_term_rejects_non_array_root() {
        let err = build_by_term(&json!({"testsByTerms": []})).unwrap_err();
        assert!(matches!(err, AggregationError::Shape { .. }));
    }

    #[test]
    fn rejects_zero_ids_with_path() {
        let payload = json!([
            {"id": 1, "number": 1, "disciplines": [{"id": 0, "name": "Calc", "categories": []}]}
        ]);
        let err = build_by_term(&payload).unwrap_err();
        match err {
            AggregationError::InvalidId { entity, path } => {
                assert_eq!(entity, "discipline");
                assert_eq!(path, "terms[0].disciplines[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_zero_reference_id() {
        let payload = json!([
            {"id": 10, "name": "Ana", "categories": [
                {"category": {"id": 7, "name": "Final", "tests": [
                    {"id": 11, "name": "P1", "pdfUrl": "u", "discipline": {"id": 0, "name": "Calc"}}
                ]}}
            ]}
        ]);
        let err = build_by_teacher(&payload).unwrap_err();
        assert!(matches!(
            err,
            AggregationError::InvalidId { entity: "discipline", .. }
        ));
    }

    #[test]
    fn by_teacher_annotates_tests_with_discipline() {
        let catalog = build_by_teacher(&teacher_payload()).unwrap();
        assert_eq!(catalog.teachers.len(), 2);

        let tests = &catalog.teachers[0].categories[0].tests;
        assert_eq!(tests[0].discipline.name, "Calc");
        assert_eq!(tests[0].discipline.id, None);
        assert_eq!(tests[1].discipline.id, Some(4));
        assert!(tests.iter().all(|t| t.teacher_id == 10 && t.category_id == 7));
        assert_eq!(catalog.test_count(), 2);
    }

    #[test]
    fn term_tree_has_one_root_per_group_and_placeholders() {
        let tree = term_tree(&build_by_term(&term_payload()).unwrap());
        assert_eq!(tree.len(), 2);

        let empty_term = &tree.roots[1];
        assert_eq!(empty_term.label, "2º term");
        assert_eq!(empty_term.child_count, 0);
        assert_eq!(empty_term.children.len(), 1);
        assert!(empty_term.children[0].is_placeholder());
        assert_eq!(empty_term.children[0].label, EMPTY_TERM);
        assert_eq!(empty_term.children[0].key.id, 2);

        let bio = tree
            .find(NodeKey {
                kind: NodeKind::Discipline,
                id: 4,
            })
            .unwrap();
        assert_eq!(bio.child_count, 0);
        assert_eq!(bio.children[0].label, EMPTY_DISCIPLINE);

        let midterm = tree
            .find(NodeKey {
                kind: NodeKind::Category,
                id: 8,
            })
            .unwrap();
        assert_eq!(midterm.children[0].label, EMPTY_CATEGORY);

        let test = tree
            .find(NodeKey {
                kind: NodeKind::Test,
                id: 11,
            })
            .unwrap();
        assert_eq!(test.label, "P1 (Ana)");
        assert_eq!(test.link.as_deref(), Some("http://x/p1.pdf"));
        assert!(test.children.is_empty());
    }

    #[test]
    fn teacher_tree_labels_tests_with_discipline() {
        let tree = teacher_tree(&build_by_teacher(&teacher_payload()).unwrap());
        assert_eq!(tree.len(), 2);

        let ana = &tree.roots[0];
        assert_eq!(ana.child_count, 1);
        let labels: Vec<&str> = ana.children[0]
            .children
            .iter()
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, vec!["P1 (Calc)", "P2 (Bio)"]);

        let bruno = &tree.roots[1];
        assert_eq!(bruno.child_count, 0);
        assert_eq!(bruno.children[0].label, EMPTY_TEACHER);
    }

    #[test]
    fn empty_payload_builds_empty_tree() {
        let tree = term_tree(&build_by_term(&json!([])).unwrap());
        assert!(tree.is_empty());
    }

    #[test]
    fn builder_is_idempotent_and_leaves_input_untouched() {
        let payload = teacher_payload();
        let snapshot = payload.clone();

        let first = teacher_tree(&build_by_teacher(&payload).unwrap());
        let second = teacher_tree(&build_by_teacher(&payload).unwrap());

        assert_eq!(first, second);
        assert_eq!(payload, snapshot);
    }
}
