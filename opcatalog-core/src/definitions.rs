// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Built-in definition set
//!
//! The operations of the discord.py-self user library as described by its
//! documentation. Order here is the catalog order served by `/operations`.

use crate::operation::{OperationRecord, ParamKind, Parameter};
use crate::service::ServiceInfo;

pub const AUTH_AND_RUNTIME: &str = "Authentication and runtime";
pub const MESSAGING: &str = "Messaging and commands";
pub const ACCOUNT: &str = "Account data and experiments";
pub const APPLICATIONS: &str = "Applications, commerce, and interactions";

/// Description served by `/metadata` for the built-in catalog
pub fn builtin_service_info() -> ServiceInfo {
    ServiceInfo::new(
        "discord.py-self Programmatic Interface",
        "HTTP surface that maps documented user-account operations to structured endpoints.",
        env!("CARGO_PKG_VERSION"),
    )
    .with_technical_documentation("docs/technical_documentation.md")
    .with_source_doc("README.rst")
    .with_source_doc("docs/quickstart.rst")
    .with_source_doc("docs/authenticating.rst")
}

pub fn builtin_operations() -> Vec<OperationRecord> {
    let mut operations = Vec::new();
    operations.extend(auth_and_runtime());
    operations.extend(messaging());
    operations.extend(account());
    operations.extend(applications());
    operations
}

fn auth_and_runtime() -> Vec<OperationRecord> {
    vec![
        OperationRecord::new(
            "authenticate_with_token",
            "Authenticate with user token",
            AUTH_AND_RUNTIME,
            "Document how to retrieve and present a Discord user token for API calls.",
        )
        .with_description(
            "Tokens are required for every user-scoped action. The documentation explains how to \
             obtain a token from the Discord client via the developer console or network headers.",
        )
        .with_parameter(Parameter::required(
            "acquisition_method",
            ParamKind::one_of(["console_snippet", "manual_header"]),
            "`console_snippet` for scripted retrieval or `manual_header` for copy/paste from a captured request.",
        ))
        .with_parameter(Parameter::required(
            "token",
            ParamKind::String,
            "The Discord user token to reuse for subsequent client operations.",
        ))
        .with_source("docs/authenticating.rst L11-L30"),
        OperationRecord::new(
            "create_client_session",
            "Create client session",
            AUTH_AND_RUNTIME,
            "Create a discord.Client instance to manage the connection lifecycle.",
        )
        .with_description(
            "Constructs the client that will own all subsequent gateway and REST interactions, with \
             optional session-aware behaviors driven by user-account features.",
        )
        .with_parameter(Parameter::optional(
            "intents",
            ParamKind::Object,
            "Gateway intent configuration to control received events.",
        ))
        .with_parameter(Parameter::optional(
            "status_tracking",
            ParamKind::Boolean,
            "Whether to enable session state tracking for the connected user.",
        ))
        .with_source("docs/quickstart.rst L22-L61")
        .with_source("README.rst L35-L38"),
        OperationRecord::new(
            "register_event_handler",
            "Register event handler",
            AUTH_AND_RUNTIME,
            "Attach lifecycle or dispatch callbacks such as on_ready or on_message.",
        )
        .with_description(
            "Uses the Client.event decorator to bind coroutine callbacks to gateway events, enabling \
             message handling and startup routines.",
        )
        .with_parameter(Parameter::required(
            "event",
            ParamKind::String,
            "The Discord event name to bind (e.g., `on_ready`, `on_message`).",
        ))
        .with_parameter(Parameter::required(
            "callback_name",
            ParamKind::String,
            "The coroutine function name registered for the event.",
        ))
        .with_source("docs/quickstart.rst L26-L53"),
        OperationRecord::new(
            "run_client",
            "Run client",
            AUTH_AND_RUNTIME,
            "Start the client using the provided user token and manage reconnection.",
        )
        .with_description(
            "Invokes client.run with the user token to establish the connection to Discord and \
             begin receiving events and dispatching handlers.",
        )
        .with_parameter(Parameter::required(
            "token",
            ParamKind::String,
            "User token used for authentication.",
        ))
        .with_parameter(Parameter::optional(
            "reconnect",
            ParamKind::Boolean,
            "Whether the client should attempt to reconnect automatically.",
        ))
        .with_source("docs/quickstart.rst L38-L61"),
        OperationRecord::new(
            "handle_rate_limits",
            "Handle rate limits",
            AUTH_AND_RUNTIME,
            "Rely on the built-in rate limit handling to avoid 429 responses.",
        )
        .with_description(
            "Documents how the library automatically respects Discord rate limits to keep requests \
             compliant and paced.",
        )
        .with_parameter(Parameter::optional(
            "policy",
            ParamKind::String,
            "Optional description of custom handling layered on top of the built-in limiter.",
        ))
        .with_source("README.rst L30-L33"),
        OperationRecord::new(
            "self_bot_safety",
            "Self-bot safety",
            AUTH_AND_RUNTIME,
            "Make use of detection-avoidance techniques for user automation.",
        )
        .with_description(
            "Highlights the library features that reduce the likelihood of user automation \
             detection by Discord.",
        )
        .with_parameter(Parameter::optional(
            "stealth_mode",
            ParamKind::Boolean,
            "Enable or disable optional safety behaviors in client usage patterns.",
        ))
        .with_source("README.rst L33-L35"),
    ]
}

fn messaging() -> Vec<OperationRecord> {
    vec![
        OperationRecord::new(
            "send_message",
            "Send message",
            MESSAGING,
            "Dispatch a message to a target channel, often within on_message handlers.",
        )
        .with_description(
            "Uses the channel.send coroutine to post text responses after filtering author and \
             content constraints.",
        )
        .with_parameter(Parameter::required(
            "channel_id",
            ParamKind::String,
            "Identifier of the channel that should receive the message.",
        ))
        .with_parameter(Parameter::required(
            "content",
            ParamKind::String,
            "Message body to send.",
        ))
        .with_parameter(Parameter::optional(
            "reply_to",
            ParamKind::String,
            "Optional message ID to reply to when constructing a response.",
        ))
        .with_source("docs/quickstart.rst L30-L59"),
        OperationRecord::new(
            "command_extension",
            "Command extension",
            MESSAGING,
            "Build prefix-based commands with the discord.ext.commands extension.",
        )
        .with_description(
            "Configures a commands.Bot with self_bot=True to register commands that wrap message \
             handling logic.",
        )
        .with_parameter(Parameter::required(
            "command_prefix",
            ParamKind::String,
            "Prefix that triggers command parsing.",
        ))
        .with_parameter(Parameter::required(
            "commands",
            ParamKind::list_of(ParamKind::Object),
            "List of command descriptors including name and callback reference.",
        ))
        .with_source("README.rst L130-L143"),
    ]
}

fn account() -> Vec<OperationRecord> {
    vec![
        OperationRecord::new(
            "manage_sessions",
            "Manage sessions",
            ACCOUNT,
            "Inspect or refresh active sessions tied to the user account.",
        )
        .with_description(
            "Covers the session-aware portions of the user API implemented by the library to keep \
             state synchronized.",
        )
        .with_parameter(Parameter::optional(
            "session_id",
            ParamKind::String,
            "Specific session identifier to query or refresh.",
        ))
        .with_parameter(Parameter::optional(
            "state",
            ParamKind::String,
            "Desired session state (e.g., active, invalidated).",
        ))
        .with_source("README.rst L35-L38"),
        OperationRecord::new(
            "update_read_states",
            "Update read states",
            ACCOUNT,
            "Sync read-state markers across channels and guilds.",
        )
        .with_description(
            "Represents the read-state APIs that record the latest message a user has seen per \
             channel or conversation.",
        )
        .with_parameter(Parameter::required(
            "channel_id",
            ParamKind::String,
            "Channel whose read state is being updated.",
        ))
        .with_parameter(Parameter::required(
            "last_message_id",
            ParamKind::String,
            "Identifier of the most recent message acknowledged as read.",
        ))
        .with_source("README.rst L37-L39"),
        OperationRecord::new(
            "manage_connections",
            "Manage external connections",
            ACCOUNT,
            "Link or unlink external account connections.",
        )
        .with_description(
            "Covers connection endpoints for services such as streaming platforms or gaming networks.",
        )
        .with_parameter(Parameter::required(
            "service",
            ParamKind::String,
            "External service identifier (e.g., twitch, steam).",
        ))
        .with_parameter(Parameter::required(
            "action",
            ParamKind::one_of(["connect", "disconnect"]),
            "Operation to apply to the connection.",
        ))
        .with_source("README.rst L39-L40"),
        OperationRecord::new(
            "manage_relationships",
            "Manage relationships",
            ACCOUNT,
            "Add, block, or remove relationships for the user account.",
        )
        .with_description(
            "Represents the friend/block relationship APIs that are available for user accounts.",
        )
        .with_parameter(Parameter::required(
            "user_id",
            ParamKind::String,
            "User identifier involved in the relationship change.",
        ))
        .with_parameter(Parameter::required(
            "action",
            ParamKind::one_of(["add", "block", "remove"]),
            "Relationship action to apply.",
        ))
        .with_source("README.rst L40-L41"),
        OperationRecord::new(
            "experiment_enrollment",
            "Experiment enrollment",
            ACCOUNT,
            "Inspect or set experiment buckets exposed to the client.",
        )
        .with_description(
            "Covers the ability to work with experiments surfaced to the Discord client for user \
             accounts.",
        )
        .with_parameter(Parameter::required(
            "experiment_id",
            ParamKind::String,
            "Identifier of the experiment to query or update.",
        ))
        .with_parameter(Parameter::optional(
            "variant",
            ParamKind::String,
            "Experiment variant or bucket value when overriding enrollment.",
        ))
        .with_source("README.rst L41-L42"),
        OperationRecord::new(
            "update_user_settings",
            "Update user settings",
            ACCOUNT,
            "Modify protobuf-backed user settings.",
        )
        .with_description(
            "Represents the rich settings payloads supported by the library for user accounts.",
        )
        .with_parameter(Parameter::required(
            "setting_key",
            ParamKind::String,
            "Settings key to change (e.g., privacy, appearance).",
        ))
        .with_parameter(Parameter::required(
            "value",
            ParamKind::Variant,
            "New value for the specified setting in protobuf-compatible form; its type depends on the key.",
        ))
        .with_source("README.rst L42-L43"),
    ]
}

fn applications() -> Vec<OperationRecord> {
    vec![
        OperationRecord::new(
            "manage_application_team",
            "Manage application or team",
            APPLICATIONS,
            "Create or update application and team metadata.",
        )
        .with_description(
            "Reflects the application/team management APIs that support creating apps and inviting \
             collaborators.",
        )
        .with_parameter(Parameter::optional(
            "application_id",
            ParamKind::String,
            "Identifier of the application to manage (omit when creating).",
        ))
        .with_parameter(Parameter::required(
            "action",
            ParamKind::one_of(["create", "update", "invite_member"]),
            "Management action to perform.",
        ))
        .with_source("README.rst L43-L44"),
        OperationRecord::new(
            "store_entitlements",
            "Manage store entitlements",
            APPLICATIONS,
            "Grant or revoke SKUs and entitlements.",
        )
        .with_description(
            "Covers the store and SKU management APIs accessible to user accounts for digital goods.",
        )
        .with_parameter(Parameter::required(
            "sku_id",
            ParamKind::String,
            "SKU identifier for the entitlement.",
        ))
        .with_parameter(Parameter::required(
            "entitlement_action",
            ParamKind::one_of(["grant", "revoke"]),
            "Whether to grant or revoke the entitlement.",
        ))
        .with_source("README.rst L44-L45"),
        OperationRecord::new(
            "billing_and_boosts",
            "Billing and boosts",
            APPLICATIONS,
            "Work with subscriptions, boosts, promotions, and payments.",
        )
        .with_description(
            "Represents the billing endpoints for managing Nitro subscriptions, server boosts, or \
             promotional credits.",
        )
        .with_parameter(Parameter::required(
            "payment_source",
            ParamKind::String,
            "Payment method identifier or token.",
        ))
        .with_parameter(Parameter::required(
            "plan",
            ParamKind::String,
            "Subscription or promotion plan name.",
        ))
        .with_parameter(Parameter::optional(
            "quantity",
            ParamKind::Integer,
            "Number of boosts or seats to purchase.",
        ))
        .with_source("README.rst L44-L45"),
        OperationRecord::new(
            "invoke_interaction",
            "Invoke interaction",
            APPLICATIONS,
            "Execute slash commands, component interactions, or buttons.",
        )
        .with_description(
            "Supports sending interaction payloads that drive Discord's interactive components on \
             user accounts.",
        )
        .with_parameter(Parameter::required(
            "interaction_type",
            ParamKind::one_of(["slash_command", "button", "select"]),
            "Type of interaction to send.",
        ))
        .with_parameter(Parameter::required(
            "payload",
            ParamKind::Object,
            "Structured interaction payload to send to Discord.",
        ))
        .with_source("README.rst L45-L46"),
    ]
}
