//! Console navigator adapter

use colored::Colorize;
use eduquiz_application::NavigatorPort;
use eduquiz_domain::QuestionRoute;

/// Navigator that "navigates" by printing the destination route.
///
/// The real application hands these routes to a client-side router; the
/// CLI shell prints them instead. Kept behind the port so the use cases
/// never navigate themselves.
pub struct ConsoleNavigator;

impl NavigatorPort for ConsoleNavigator {
    fn go_to_question(&self, route: &QuestionRoute) {
        println!("{} {}", "->".green().bold(), route.path());
    }

    fn go_to_login(&self) {
        println!("{} /login", "->".yellow().bold());
    }
}
