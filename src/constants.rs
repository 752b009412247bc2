/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used to locate the configuration
/// directory.
pub const APPLICATION: &str = "flow_diagram";

/// Name of the theme file looked up in the configuration directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Argument value selecting standard input as the workflow source
pub const STDIN_MARKER: &str = "-";

/// Help text for the stages command-line option
pub const STAGES_HELP: &str = "Workflow description (JSON or YAML file, or '-' for stdin)";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Write the diagram to this file instead of printing it";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read diagram colours and direction from a specific config file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only log errors";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";

/// Example shown below the usage message
pub const USAGE_EXAMPLE: &str = "Example:\n  echo '{\"workflow_name\":\"Example\",\"workflow_type\":\"simple\",\"stages\":[{\"name\":\"Stage 1\"},{\"name\":\"Stage 2\"}]}' | flowgen --stages - --output diagram.mmd";

/// Node identifier of the start marker
pub const START_ID: &str = "Start";

/// Node identifier of the end marker
pub const END_ID: &str = "End";

/// Label of the start marker
pub const START_LABEL: &str = "Workflow Start";

/// Label of the end marker
pub const END_LABEL: &str = "Workflow End";

/// Label of the end marker in role-annotated diagrams
pub const COMPLETE_LABEL: &str = "Complete";

/// Role shown for stages without an owner
pub const UNKNOWN_ROLE: &str = "Unknown";

/// Condition shown on feedback loops without one
pub const DEFAULT_LOOP_CONDITION: &str = "Iterate";

/// Fill colour of the start marker
pub const START_COLOR: &str = "#e1f5e1";

/// Fill colour of the end marker
pub const END_COLOR: &str = "#ffe1e1";

/// Fill colour of the end marker in role-annotated diagrams
pub const COMPLETE_COLOR: &str = "#e8f5e9";

/// Fill colour of decision nodes
pub const DECISION_COLOR: &str = "#fff4e1";

/// Fill colour of roles missing from the role table
pub const UNKNOWN_ROLE_COLOR: &str = "#f5f5f5";

/// Built-in role colour table
///
/// `Unknown` is absent on purpose: it resolves to the unknown-role colour.
pub const ROLE_COLORS: [(&str, &str); 3] = [
    ("Role A", "#e3f2fd"),
    ("Role B", "#f3e5f5"),
    ("Role C", "#fff3e0"),
];
