//! Trunk entry point: mounts the quest site into `<body>`.

// The dependency set belongs to the library target.
#![allow(unused_crate_dependencies)]

use nero_quests::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
