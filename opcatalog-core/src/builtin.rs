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

//! Builtin operation dataset
//!
//! The documented `discord.py-self` user-account operations, in the order
//! they are served. Sources cite the upstream docs by file and line range.

use crate::operation::{Operation, Parameter};

/// The fixed list of operations the service ships with
pub fn builtin_operations() -> Vec<Operation> {
    let mut operations = Vec::with_capacity(18);
    operations.extend(authentication_and_runtime());
    operations.extend(messaging());
    operations.extend(account());
    operations.extend(applications_commerce_interactions());
    operations
}

fn authentication_and_runtime() -> Vec<Operation> {
    vec![
        Operation::new("authenticate_with_token", "Authenticate with user token", "authentication")
            .with_summary("Document how to retrieve and present a Discord user token for API calls.")
            .with_description(
                "Tokens are required for every user-scoped action. The documentation explains how to \
                 obtain a token from the Discord client via the developer console or network headers.",
            )
            .with_parameter(Parameter::required(
                "acquisition_method",
                "string",
                "`console_snippet` for scripted retrieval or `manual_header` for copy/paste from a captured request.",
            ))
            .with_parameter(Parameter::required(
                "token",
                "string",
                "The Discord user token to reuse for subsequent client operations.",
            ))
            .with_source("docs/authenticating.rst L11-L30"),
        Operation::new("create_client_session", "Create client session", "runtime")
            .with_summary("Create a discord.Client instance to manage the connection lifecycle.")
            .with_description(
                "Constructs the client that will own all subsequent gateway and REST interactions, with optional \
                 session-aware behaviors driven by user-account features.",
            )
            .with_parameter(Parameter::optional(
                "intents",
                "object",
                "Gateway intent configuration to control received events.",
            ))
            .with_parameter(Parameter::optional(
                "status_tracking",
                "boolean",
                "Whether to enable session state tracking for the connected user.",
            ))
            .with_source("docs/quickstart.rst L22-L61")
            .with_source("README.rst L35-L38"),
        Operation::new("register_event_handler", "Register event handler", "runtime")
            .with_summary("Attach lifecycle or dispatch callbacks such as on_ready or on_message.")
            .with_description(
                "Uses the Client.event decorator to bind coroutine callbacks to gateway events, enabling \
                 message handling and startup routines.",
            )
            .with_parameter(Parameter::required(
                "event",
                "string",
                "The Discord event name to bind (e.g., `on_ready`, `on_message`).",
            ))
            .with_parameter(Parameter::required(
                "callback_name",
                "string",
                "The coroutine function name registered for the event.",
            ))
            .with_source("docs/quickstart.rst L26-L53"),
        Operation::new("run_client", "Run client", "runtime")
            .with_summary("Start the client using the provided user token and manage reconnection.")
            .with_description(
                "Invokes client.run with the user token to establish the connection to Discord and begin \
                 receiving events and dispatching handlers.",
            )
            .with_parameter(Parameter::required("token", "string", "User token used for authentication."))
            .with_parameter(Parameter::optional(
                "reconnect",
                "boolean",
                "Whether the client should attempt to reconnect automatically.",
            ))
            .with_source("docs/quickstart.rst L38-L61"),
        Operation::new("handle_rate_limits", "Handle rate limits", "runtime")
            .with_summary("Rely on the built-in rate limit handling to avoid 429 responses.")
            .with_description(
                "Documents how the library automatically respects Discord rate limits to keep requests compliant and paced.",
            )
            .with_parameter(Parameter::optional(
                "policy",
                "string",
                "Optional description of custom handling layered on top of the built-in limiter.",
            ))
            .with_source("README.rst L30-L33"),
        Operation::new("self_bot_safety", "Self-bot safety", "runtime")
            .with_summary("Make use of detection-avoidance techniques for user automation.")
            .with_description(
                "Highlights the library features that reduce the likelihood of user automation detection by Discord.",
            )
            .with_parameter(Parameter::optional(
                "stealth_mode",
                "boolean",
                "Enable or disable optional safety behaviors in client usage patterns.",
            ))
            .with_source("README.rst L33-L35"),
    ]
}

fn messaging() -> Vec<Operation> {
    vec![
        Operation::new("send_message", "Send message", "messaging")
            .with_summary("Dispatch a message to a target channel, often within on_message handlers.")
            .with_description(
                "Uses the channel.send coroutine to post text responses after filtering author and content constraints.",
            )
            .with_parameter(Parameter::required(
                "channel_id",
                "string",
                "Identifier of the channel that should receive the message.",
            ))
            .with_parameter(Parameter::required("content", "string", "Message body to send."))
            .with_parameter(Parameter::optional(
                "reply_to",
                "string",
                "Optional message ID to reply to when constructing a response.",
            ))
            .with_source("docs/quickstart.rst L30-L59"),
        Operation::new("command_extension", "Command extension", "messaging")
            .with_summary("Build prefix-based commands with the discord.ext.commands extension.")
            .with_description(
                "Configures a commands.Bot with self_bot=True to register commands that wrap message handling logic.",
            )
            .with_parameter(Parameter::required(
                "command_prefix",
                "string",
                "Prefix that triggers command parsing.",
            ))
            .with_parameter(Parameter::required(
                "commands",
                "array",
                "List of command descriptors including name and callback reference.",
            ))
            .with_source("README.rst L130-L143"),
    ]
}

fn account() -> Vec<Operation> {
    vec![
        Operation::new("manage_sessions", "Manage sessions", "account")
            .with_summary("Inspect or refresh active sessions tied to the user account.")
            .with_description(
                "Covers the session-aware portions of the user API implemented by the library to keep state synchronized.",
            )
            .with_parameter(Parameter::optional(
                "session_id",
                "string",
                "Specific session identifier to query or refresh.",
            ))
            .with_parameter(Parameter::optional(
                "state",
                "string",
                "Desired session state (e.g., active, invalidated).",
            ))
            .with_source("README.rst L35-L38"),
        Operation::new("update_read_states", "Update read states", "account")
            .with_summary("Sync read-state markers across channels and guilds.")
            .with_description(
                "Represents the read-state APIs that record the latest message a user has seen per channel or conversation.",
            )
            .with_parameter(Parameter::required(
                "channel_id",
                "string",
                "Channel whose read state is being updated.",
            ))
            .with_parameter(Parameter::required(
                "last_message_id",
                "string",
                "Identifier of the most recent message acknowledged as read.",
            ))
            .with_source("README.rst L37-L39"),
        Operation::new("manage_connections", "Manage external connections", "account")
            .with_summary("Link or unlink external account connections.")
            .with_description(
                "Covers connection endpoints for services such as streaming platforms or gaming networks.",
            )
            .with_parameter(Parameter::required(
                "service",
                "string",
                "External service identifier (e.g., twitch, steam).",
            ))
            .with_parameter(Parameter::required(
                "action",
                "string",
                "Operation to apply to the connection (connect or disconnect).",
            ))
            .with_source("README.rst L39-L40"),
        Operation::new("manage_relationships", "Manage relationships", "account")
            .with_summary("Add, block, or remove relationships for the user account.")
            .with_description(
                "Represents the friend/block relationship APIs that are available for user accounts.",
            )
            .with_parameter(Parameter::required(
                "user_id",
                "string",
                "User identifier involved in the relationship change.",
            ))
            .with_parameter(Parameter::required(
                "action",
                "string",
                "Relationship action such as add, block, or remove.",
            ))
            .with_source("README.rst L40-L41"),
        Operation::new("experiment_enrollment", "Experiment enrollment", "account")
            .with_summary("Inspect or set experiment buckets exposed to the client.")
            .with_description(
                "Covers the ability to work with experiments surfaced to the Discord client for user accounts.",
            )
            .with_parameter(Parameter::required(
                "experiment_id",
                "string",
                "Identifier of the experiment to query or update.",
            ))
            .with_parameter(Parameter::optional(
                "variant",
                "string",
                "Experiment variant or bucket value when overriding enrollment.",
            ))
            .with_source("README.rst L41-L42"),
        Operation::new("update_user_settings", "Update user settings", "account")
            .with_summary("Modify protobuf-backed user settings.")
            .with_description("Represents the rich settings payloads supported by the library for user accounts.")
            .with_parameter(Parameter::required(
                "setting_key",
                "string",
                "Settings key to change (e.g., privacy, appearance).",
            ))
            .with_parameter(Parameter::required(
                "value",
                "string",
                "New value for the specified setting in protobuf-compatible form.",
            ))
            .with_source("README.rst L42-L43"),
    ]
}

fn applications_commerce_interactions() -> Vec<Operation> {
    vec![
        Operation::new("manage_application_team", "Manage application or team", "applications")
            .with_summary("Create or update application and team metadata.")
            .with_description(
                "Reflects the application/team management APIs that support creating apps and inviting collaborators.",
            )
            .with_parameter(Parameter::optional(
                "application_id",
                "string",
                "Identifier of the application to manage (omit when creating).",
            ))
            .with_parameter(Parameter::required(
                "action",
                "string",
                "Operation such as create, update, or invite_member.",
            ))
            .with_source("README.rst L43-L44"),
        Operation::new("store_entitlements", "Manage store entitlements", "commerce")
            .with_summary("Grant or revoke SKUs and entitlements.")
            .with_description(
                "Covers the store and SKU management APIs accessible to user accounts for digital goods.",
            )
            .with_parameter(Parameter::required("sku_id", "string", "SKU identifier for the entitlement."))
            .with_parameter(Parameter::required(
                "entitlement_action",
                "string",
                "grant or revoke entitlement permissions.",
            ))
            .with_source("README.rst L44-L45"),
        Operation::new("billing_and_boosts", "Billing and boosts", "commerce")
            .with_summary("Work with subscriptions, boosts, promotions, and payments.")
            .with_description(
                "Represents the billing endpoints for managing Nitro subscriptions, server boosts, or promotional credits.",
            )
            .with_parameter(Parameter::required(
                "payment_source",
                "string",
                "Payment method identifier or token.",
            ))
            .with_parameter(Parameter::required("plan", "string", "Subscription or promotion plan name."))
            .with_parameter(Parameter::optional(
                "quantity",
                "integer",
                "Number of boosts or seats to purchase.",
            ))
            .with_source("README.rst L44-L45"),
        Operation::new("invoke_interaction", "Invoke interaction", "interactions")
            .with_summary("Execute slash commands, component interactions, or buttons.")
            .with_description(
                "Supports sending interaction payloads that drive Discord's interactive components on user accounts.",
            )
            .with_parameter(Parameter::required(
                "interaction_type",
                "string",
                "Type of interaction (slash_command, button, select).",
            ))
            .with_parameter(Parameter::required(
                "payload",
                "object",
                "Structured interaction payload to send to Discord.",
            ))
            .with_source("README.rst L45-L46"),
    ]
}
