pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Building,
    Cpu,
    Cog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

pub const NAVIGATION: [NavItem; 4] = [
    NavItem {
        name: "Dashboard",
        href: "/",
        icon: NavIcon::Home,
    },
    NavItem {
        name: "Hospitals",
        href: "/",
        icon: NavIcon::Building,
    },
    NavItem {
        name: "Agent Console",
        href: "/agents",
        icon: NavIcon::Cpu,
    },
    NavItem {
        name: "Settings",
        href: "/settings",
        icon: NavIcon::Cog,
    },
];

pub fn hospital_route(id: &str) -> String {
    format!("/hospital/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(path: &str) -> Vec<&'static str> {
        NAVIGATION
            .iter()
            .filter(|item| item.is_active(path))
            .map(|item| item.name)
            .collect()
    }

    #[test]
    fn root_highlights_both_root_entries() {
        assert_eq!(active("/"), vec!["Dashboard", "Hospitals"]);
    }

    #[test]
    fn comparison_is_exact() {
        assert_eq!(active("/agents"), vec!["Agent Console"]);
        assert!(active("/agents/extra").is_empty());
        assert!(active("/hospital/h-1").is_empty());
    }
}
