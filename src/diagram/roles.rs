//! Role-annotated workflows

use crate::config::Theme;
use crate::constants::COMPLETE_LABEL;
use crate::workflow::Workflow;

use super::graph::Graph;
use super::linear::{push_chain, push_marker_styles};
use super::stage_id;

/// Renders a chain whose nodes show their owning role
///
/// Stage nodes are coloured by role. Roles are visited in order of first
/// appearance so the output does not depend on hashing.
pub fn render_roles(workflow: &Workflow, theme: &Theme) -> Graph {
    let labels: Vec<String> = workflow
        .stages
        .iter()
        .map(|s| format!("{}<br/>Owner: {}", s.name, s.role_or_unknown()))
        .collect();

    let mut graph = Graph::new(theme.direction);
    push_chain(&mut graph, &labels, COMPLETE_LABEL);
    push_marker_styles(&mut graph, &theme.palette.start, &theme.palette.complete);

    for role in distinct_roles(workflow) {
        let color = theme.role_color(role);
        for (index, stage) in workflow.stages.iter().enumerate() {
            if stage.role_or_unknown() == role {
                graph.push_style(&stage_id(index), color);
            }
        }
    }

    graph
}

/// Distinct roles in order of first appearance, `Unknown` standing in for none
fn distinct_roles(workflow: &Workflow) -> Vec<&str> {
    let mut roles: Vec<&str> = Vec::new();
    for stage in &workflow.stages {
        let role = stage.role_or_unknown();
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{Stage, WorkflowType};

    #[test]
    fn test_two_roles() {
        let workflow = Workflow::new(
            "roles",
            WorkflowType::RoleAnnotated,
            vec![Stage::with_role("A", "Role A"), Stage::with_role("B", "Role B")],
        );
        let text = render_roles(&workflow, &Theme::default()).to_string();

        let expected = "graph TD\n\
            \x20   Start([Workflow Start]) --> S1[A<br/>Owner: Role A]\n\
            \x20   S1[A<br/>Owner: Role A] --> S2[B<br/>Owner: Role B]\n\
            \x20   S2 --> End([Complete])\n\
            \x20   style Start fill:#e1f5e1\n\
            \x20   style End fill:#e8f5e9\n\
            \x20   style S1 fill:#e3f2fd\n\
            \x20   style S2 fill:#f3e5f5";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_missing_role_is_unknown_and_still_coloured() {
        let workflow = Workflow::new(
            "roles",
            WorkflowType::RoleAnnotated,
            vec![
                Stage::new("Intake"),
                Stage::with_role("Review", "Auditor"),
                Stage::new("Archive"),
            ],
        );
        let graph = render_roles(&workflow, &Theme::default());
        let text = graph.to_string();

        assert!(text.contains("S1[Intake<br/>Owner: Unknown]"));
        assert!(text.contains("S3[Archive<br/>Owner: Unknown]"));

        let styles: Vec<String> = graph
            .styles()
            .map(|s| format!("{} {}", s.id, s.fill))
            .collect();
        assert_eq!(
            styles,
            vec![
                "Start #e1f5e1",
                "End #e8f5e9",
                "S1 #f5f5f5",
                "S3 #f5f5f5",
                "S2 #f5f5f5",
            ]
        );
    }

    #[test]
    fn test_role_order_is_first_appearance() {
        let workflow = Workflow::new(
            "roles",
            WorkflowType::RoleAnnotated,
            vec![
                Stage::with_role("A", "Role C"),
                Stage::with_role("B", "Role A"),
                Stage::with_role("C", "Role C"),
            ],
        );
        assert_eq!(distinct_roles(&workflow), vec!["Role C", "Role A"]);

        let first = render_roles(&workflow, &Theme::default()).to_string();
        let second = render_roles(&workflow, &Theme::default()).to_string();
        assert_eq!(first, second);
        assert!(first.ends_with(
            "style S1 fill:#fff3e0\n    style S3 fill:#fff3e0\n    style S2 fill:#e3f2fd"
        ));
    }

    #[test]
    fn test_configured_role_colour() {
        let mut theme = Theme::default();
        theme
            .roles
            .insert("Editor".to_string(), "#abcdef".to_string());
        let workflow = Workflow::new(
            "roles",
            WorkflowType::RoleAnnotated,
            vec![Stage::with_role("Edit", "Editor")],
        );

        let text = render_roles(&workflow, &theme).to_string();
        assert!(text.contains("style S1 fill:#abcdef"));
    }
}
