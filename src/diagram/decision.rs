//! Decision workflows
//!
//! Stages may branch into labeled options through a decision node, and
//! branches may meet again at a stage that was already drawn.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::config::Theme;
use crate::constants::{END_ID, END_LABEL, START_ID, START_LABEL};
use crate::workflow::Workflow;

use super::graph::{Endpoint, Graph, Node};
use super::linear::push_marker_styles;
use super::{decision_id, stage_id};

/// Identifiers handed out to stage names, in order of first encounter
#[derive(Debug, Default)]
struct IdRegistry {
    ids: HashMap<String, String>,
    order: Vec<String>,
}

impl IdRegistry {
    fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Returns the identifier for `name` and whether it was assigned just now
    fn assign(&mut self, name: &str) -> (String, bool) {
        if let Some(id) = self.get(name) {
            return (id.to_string(), false);
        }
        let id = stage_id(self.order.len());
        self.ids.insert(name.to_string(), id.clone());
        self.order.push(id.clone());
        (id, true)
    }

    /// Assigned identifiers in assignment order
    fn assigned(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Endpoint for a stage: declared inline the first time it is drawn
fn stage_endpoint(id: &str, name: &str, first_time: bool) -> Endpoint {
    if first_time {
        Endpoint::Declared(Node::rectangle(id, name))
    } else {
        Endpoint::reference(id)
    }
}

/// Renders a workflow with decision points
///
/// Each stage gets an identifier the first time it is reached and keeps it,
/// so an option that leads back to a known stage only adds an edge. A stage
/// whose successor was already reached through a branch does not chain to
/// it; both are branch targets. Every stage without an outgoing edge is
/// connected to End.
pub fn render_decision(workflow: &Workflow, theme: &Theme) -> Graph {
    let mut graph = Graph::new(theme.direction);
    let Some(first) = workflow.stages.first() else {
        return graph;
    };

    let mut registry = IdRegistry::default();
    let mut sources: HashSet<String> = HashSet::new();
    let mut decisions: Vec<String> = Vec::new();

    let (first_id, _) = registry.assign(&first.name);
    graph.push_edge(
        Endpoint::Declared(Node::stadium(START_ID, START_LABEL)),
        Endpoint::Declared(Node::rectangle(&first_id, &first.name)),
        None,
    );

    for (index, stage) in workflow.stages.iter().enumerate() {
        // Stages not reachable from earlier ones are drawn where they appear
        let (id, unseen) = registry.assign(&stage.name);

        if let Some(decision) = workflow.decision_for(&stage.name) {
            let node_id = decision_id(decisions.len());
            trace!("Stage '{}' branches through {}", stage.name, node_id);

            graph.push_edge(
                stage_endpoint(&id, &stage.name, unseen),
                Endpoint::reference(&node_id),
                None,
            );
            graph.push_node(Node::diamond(&node_id, &decision.name));
            sources.insert(id);

            for option in &decision.options {
                let (target_id, new_target) = registry.assign(&option.next_stage);
                graph.push_edge(
                    Endpoint::reference(&node_id),
                    stage_endpoint(&target_id, &option.next_stage, new_target),
                    Some(option.label.as_str()),
                );
            }

            sources.insert(node_id.clone());
            decisions.push(node_id);
            continue;
        }

        match workflow.stages.get(index + 1) {
            Some(next) if !registry.contains(&next.name) => {
                let (next_id, _) = registry.assign(&next.name);
                graph.push_edge(
                    Endpoint::Declared(Node::rectangle(&id, &stage.name)),
                    Endpoint::Declared(Node::rectangle(&next_id, &next.name)),
                    None,
                );
                sources.insert(id);
            }
            _ if unseen => graph.push_node(Node::rectangle(&id, &stage.name)),
            _ => {}
        }
    }

    let mut end_declared = false;
    for id in registry.assigned() {
        if sources.contains(id) {
            continue;
        }
        let end = if end_declared {
            Endpoint::reference(END_ID)
        } else {
            end_declared = true;
            Endpoint::Declared(Node::stadium(END_ID, END_LABEL))
        };
        graph.push_edge(Endpoint::reference(id), end, None);
    }

    push_marker_styles(&mut graph, &theme.palette.start, &theme.palette.end);
    for node_id in &decisions {
        graph.push_style(node_id, &theme.palette.decision);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{Decision, DecisionOption, Stage, WorkflowType};

    fn decision(stage: &str, name: &str, options: &[(&str, &str)]) -> Decision {
        Decision {
            stage: stage.to_string(),
            name: name.to_string(),
            options: options
                .iter()
                .map(|(label, next)| DecisionOption {
                    label: label.to_string(),
                    next_stage: next.to_string(),
                })
                .collect(),
        }
    }

    fn workflow(names: &[&str], decisions: Vec<Decision>) -> Workflow {
        let mut workflow = Workflow::new(
            "test",
            WorkflowType::Decision,
            names.iter().map(|n| Stage::new(n)).collect(),
        );
        workflow.decisions = decisions;
        workflow
    }

    #[test]
    fn test_registry_reuses_identifiers() {
        let mut registry = IdRegistry::default();
        assert_eq!(registry.assign("A"), ("S1".to_string(), true));
        assert_eq!(registry.assign("B"), ("S2".to_string(), true));
        assert_eq!(registry.assign("A"), ("S1".to_string(), false));
        assert_eq!(registry.assigned().collect::<Vec<_>>(), vec!["S1", "S2"]);
    }

    #[test]
    fn test_two_way_branch() {
        let wf = workflow(
            &["A", "B", "C1", "C2"],
            vec![decision("B", "Approved?", &[("Yes", "C1"), ("No", "C2")])],
        );
        let text = render_decision(&wf, &Theme::default()).to_string();

        let expected = "graph TD\n\
            \x20   Start([Workflow Start]) --> S1[A]\n\
            \x20   S1[A] --> S2[B]\n\
            \x20   S2 --> D1\n\
            \x20   D1{Approved?}\n\
            \x20   D1 -->|Yes| S3[C1]\n\
            \x20   D1 -->|No| S4[C2]\n\
            \x20   S3 --> End([Workflow End])\n\
            \x20   S4 --> End\n\
            \x20   style Start fill:#e1f5e1\n\
            \x20   style End fill:#ffe1e1\n\
            \x20   style D1 fill:#fff4e1";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_merge_point_is_declared_once() {
        let wf = workflow(
            &["A", "B", "C", "D"],
            vec![
                decision("A", "First?", &[("Left", "B"), ("Right", "C")]),
                decision("B", "Again?", &[("Retry", "A"), ("Done", "D")]),
                decision("C", "Merge?", &[("Join", "D")]),
            ],
        );
        let graph = render_decision(&wf, &Theme::default());
        let text = graph.to_string();

        assert!(text.contains("D2 -->|Retry| S1\n"));
        assert!(text.contains("D2 -->|Done| S4[D]"));
        assert!(text.contains("D3 -->|Join| S4\n"));
        assert_eq!(text.matches("S4[D]").count(), 1);

        // Only D is a leaf
        assert!(text.contains("S4 --> End([Workflow End])"));
        assert_eq!(text.matches("--> End").count(), 1);
        for id in ["D1", "D2", "D3"] {
            assert!(text.contains(&format!("style {id} fill:#fff4e1")));
        }
    }

    #[test]
    fn test_new_option_target_becomes_node() {
        let wf = workflow(
            &["A"],
            vec![decision("A", "Outcome", &[("Escalate", "Manager review")])],
        );
        let text = render_decision(&wf, &Theme::default()).to_string();

        assert!(text.contains("D1 -->|Escalate| S2[Manager review]"));
        assert!(text.contains("S2 --> End([Workflow End])"));
    }

    #[test]
    fn test_unreachable_stage_is_still_drawn() {
        let wf = workflow(
            &["A", "B", "C"],
            vec![decision("A", "Skip?", &[("Yes", "C")])],
        );
        let text = render_decision(&wf, &Theme::default()).to_string();

        // B is never targeted, so it is declared where it appears
        assert!(text.contains("D1 -->|Yes| S2[C]"));
        assert!(text.contains("    S3[B]\n"));
        assert!(text.contains("S2 --> End([Workflow End])"));
        assert!(text.contains("S3 --> End\n"));
    }

    #[test]
    fn test_without_decisions_matches_a_chain() {
        let wf = workflow(&["A", "B"], Vec::new());
        let graph = render_decision(&wf, &Theme::default());
        let text = graph.to_string();

        assert!(text.contains("Start([Workflow Start]) --> S1[A]"));
        assert!(text.contains("S1[A] --> S2[B]"));
        assert!(text.contains("S2 --> End([Workflow End])"));
        assert_eq!(graph.styles().count(), 2);
    }

    #[test]
    fn test_only_first_decision_of_a_stage_is_used() {
        let wf = workflow(
            &["A", "B", "C"],
            vec![
                decision("A", "First", &[("Go", "B")]),
                decision("A", "Second", &[("Go", "C")]),
            ],
        );
        let text = render_decision(&wf, &Theme::default()).to_string();

        let expected = "graph TD\n\
            \x20   Start([Workflow Start]) --> S1[A]\n\
            \x20   S1 --> D1\n\
            \x20   D1{First}\n\
            \x20   D1 -->|Go| S2[B]\n\
            \x20   S2[B] --> S3[C]\n\
            \x20   S3 --> End([Workflow End])\n\
            \x20   style Start fill:#e1f5e1\n\
            \x20   style End fill:#ffe1e1\n\
            \x20   style D1 fill:#fff4e1";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_decision_on_unknown_stage_is_ignored() {
        let with_stray = workflow(
            &["A", "B"],
            vec![decision("Ghost", "Lost?", &[("Go", "Nowhere")])],
        );
        let without = workflow(&["A", "B"], Vec::new());

        let text = render_decision(&with_stray, &Theme::default()).to_string();
        assert_eq!(text, render_decision(&without, &Theme::default()).to_string());
        assert!(!text.contains("D1"));
        assert!(!text.contains("Nowhere"));
    }

    #[test]
    fn test_decision_without_options_has_no_outgoing_edge() {
        let wf = workflow(&["A", "B"], vec![decision("A", "Hold?", &[])]);
        let text = render_decision(&wf, &Theme::default()).to_string();

        let expected = "graph TD\n\
            \x20   Start([Workflow Start]) --> S1[A]\n\
            \x20   S1 --> D1\n\
            \x20   D1{Hold?}\n\
            \x20   S2[B]\n\
            \x20   S2 --> End([Workflow End])\n\
            \x20   style Start fill:#e1f5e1\n\
            \x20   style End fill:#ffe1e1\n\
            \x20   style D1 fill:#fff4e1";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_identifier_prefixes_do_not_hide_leaves() {
        // S1 is a prefix of S10; only S10 and S2 are leaves here
        let names: Vec<String> = (1..=10).map(|i| format!("N{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let wf = workflow(&refs, vec![decision("N1", "Jump", &[("Go", "N10")])]);
        let text = render_decision(&wf, &Theme::default()).to_string();

        assert!(text.contains("S1 --> D1"));
        assert!(text.contains("D1 -->|Go| S2[N10]"));
        assert!(text.contains("S2 --> End([Workflow End])"));
        // N9 does not chain to N10, which was reached through the branch
        assert!(text.contains("S10 --> End"));
        assert!(!text.contains("S1 --> End"));
    }
}
