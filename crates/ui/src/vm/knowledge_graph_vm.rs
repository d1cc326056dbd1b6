use study_core::model::KnowledgeGraph;

use crate::vm::markdown_vm::format_markdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgePointVm {
    pub name: String,
    pub description_html: String,
    pub difficulty_label: String,
    pub prerequisites_label: Option<String>,
}

#[must_use]
pub fn map_knowledge_graph(graph: &KnowledgeGraph) -> Vec<KnowledgePointVm> {
    graph
        .nodes
        .iter()
        .map(|node| {
            let prerequisites = node
                .prerequisites
                .iter()
                .map(|id| {
                    graph
                        .nodes
                        .iter()
                        .find(|other| &other.id == id)
                        .map_or(id.as_str(), |other| other.name.as_str())
                })
                .collect::<Vec<_>>();
            KnowledgePointVm {
                name: node.name.clone(),
                description_html: format_markdown(Some(&node.description)),
                difficulty_label: format!(
                    "难度：{}{}",
                    "★".repeat(usize::from(node.difficulty.min(5))),
                    "☆".repeat(usize::from(5 - node.difficulty.min(5)))
                ),
                prerequisites_label: (!prerequisites.is_empty())
                    .then(|| format!("前置：{}", prerequisites.join("、"))),
            }
        })
        .collect()
}
