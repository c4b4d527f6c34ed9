use askama::Template;
use axum::response::Response;

use super::{Shell, render};
use crate::session::Session;

pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        title: "Electrical Installation",
        description: "Professional installation of electrical systems for homes and businesses.",
    },
    ServiceCard {
        title: "Repair and Maintenance",
        description: "Quick and reliable repair services for all your electrical issues.",
    },
    ServiceCard {
        title: "Energy Efficiency Upgrades",
        description: "Upgrade your electrical systems to save energy and reduce costs.",
    },
    ServiceCard {
        title: "Safety Inspections",
        description: "Comprehensive safety inspections to ensure your electrical systems are up to code.",
    },
    ServiceCard {
        title: "Emergency Services",
        description: "24/7 emergency electrical services for urgent issues.",
    },
    ServiceCard {
        title: "Smart Home Integration",
        description: "Installation and setup of smart home electrical systems.",
    },
];

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub shell: Shell,
    pub services: &'static [ServiceCard],
}

pub async fn show(session: Session) -> Response {
    render(ServicesTemplate {
        shell: Shell::new(session, "Our Services", "/services"),
        services: &SERVICES,
    })
}
