//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--base-url <url>`: Drupal origin to query
//! - `--username <name>`: Basic auth username
//! - `--password-prompt`: Read the basic auth password from the terminal
//! - `--debug`: Enable debug logging

use clap::{Parser, Subcommand};

use crate::core::types::DrupalType;

/// idc - Fetch and resolve Islandora resources over JSON:API
#[derive(Parser, Debug)]
#[command(name = "idc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Drupal origin, e.g. https://islandora-idc.traefik.me
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Basic auth username
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Prompt for the basic auth password
    #[arg(long, global = true)]
    pub password_prompt: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one resource by type and id
    #[command(
        name = "get",
        long_about = "Fetch one resource by type and id.\n\n\
            Issues GET <base-url>/jsonapi/<entity>/<bundle>?filter[id]=<id> and prints \
            the returned document as JSON. Fails unless exactly one resource matches.",
        after_help = "\
EXAMPLES:
    # Fetch a repository object
    idc get node--islandora_object 815a4c04-0be5-44f1-a876-e8ddc11dcf21

    # Fetch an image media entity from another site
    idc --base-url http://localhost:8000 get media--image 090690a5-4db5-4d72-a94e-3b26a90b516b"
    )]
    Get {
        /// Resource type, e.g. node--islandora_object
        #[arg(value_name = "TYPE")]
        resource_type: DrupalType,

        /// Resource id (UUID)
        id: String,
    },

    /// Resolve every reference in one relationship field
    #[command(
        name = "related",
        long_about = "Resolve every reference in one relationship field.\n\n\
            Fetches the primary resource, reads the named field from its relationships, \
            then fetches each referenced resource and prints it as JSON.",
        after_help = "\
EXAMPLES:
    # Print the creators of a repository object
    idc related node--islandora_object 815a4c04-0be5-44f1-a876-e8ddc11dcf21 field_creator

    # Print the file behind an image
    idc related media--image 090690a5-4db5-4d72-a94e-3b26a90b516b field_media_image"
    )]
    Related {
        /// Resource type, e.g. node--islandora_object
        #[arg(value_name = "TYPE")]
        resource_type: DrupalType,

        /// Resource id (UUID)
        id: String,

        /// Relationship field name, e.g. field_member_of
        field: String,
    },

    /// Show the effective configuration
    #[command(name = "config")]
    Config,
}
