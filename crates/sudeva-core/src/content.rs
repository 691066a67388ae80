//! Static page content.
//!
//! Every section's copy, image path and link lives here so the view layer only
//! decides layout. Image paths are site-absolute and resolved against the
//! configured assets directory at run time.

use std::collections::HashSet;

/// In-page anchors. The page has no routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Services,
    Projects,
    Blog,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Projects,
        Anchor::Blog,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Projects => "projects",
            Anchor::Blog => "blog",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// Label in the mobile menu and footer.
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Services => "Services",
            Anchor::Projects => "Projects",
            Anchor::Blog => "Blog",
            Anchor::Contact => "Contact",
        }
    }

    /// Label in the desktop header, where the blog is sold as solar content.
    pub fn header_label(&self) -> &'static str {
        match self {
            Anchor::Blog => "Solar Solutions",
            other => other.label(),
        }
    }
}

pub const COMPANY_NAME: &str = "SUDEVA ENGINEERS";
pub const LOGO: &str = "/images/logo.png";
pub const TAGLINE: &str = "Engineering solutions that build and power tomorrow";
pub const COPYRIGHT: &str = "© 2023 Sudeva Engineers. All rights reserved.";

/// Hero slideshow, in display order.
pub const HERO_IMAGES: [&str; 4] = [
    "/images/1_front web page.jpg",
    "/images/2_front web page.jpg",
    "/images/3_front web page.jpg",
    "/images/4_front web page.jpg",
];

pub const HERO_SUBTITLE: &str =
    "Designing and delivering sustainable solar, construction, and infrastructure solutions.";

/// Call-to-action link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub target: Anchor,
}

pub const HERO_CTAS: [Cta; 2] = [
    Cta {
        label: "Learn More",
        target: Anchor::About,
    },
    Cta {
        label: "Our Projects",
        target: Anchor::Projects,
    },
];

pub const QUOTE_CTA: Cta = Cta {
    label: "Get a Quote",
    target: Anchor::Contact,
};

/// Icon + title + one-liner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const WHY_US_LEAD: &str =
    "Sustainable infrastructure through precision engineering and human-centered, tech-driven design";

pub const WHY_US: [Feature; 3] = [
    Feature {
        icon: "/Sudeva Website Assets/Icons/eco.png",
        title: "Sustainable innovations",
        body: "Driving technological progress with low environmental impact",
    },
    Feature {
        icon: "/Sudeva Website Assets/Icons/engineering.png",
        title: "Integrated expertise",
        body: "Solving real-world engineering problems with cross-disciplinary teams",
    },
    Feature {
        icon: "/Sudeva Website Assets/Icons/priority.png",
        title: "Safety & reliability",
        body: "Ensuring reliability and peace of mind for all stakeholders",
    },
];

/// Picture card with a title and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

/// Section heading block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub lead: &'static str,
}

pub const SERVICES_HEADING: Heading = Heading {
    eyebrow: None,
    title: "Our Services",
    subtitle: Some("Comprehensive solar solutions for sustainable transformation"),
    lead: "End-to-end solar services: consult, design, install, maintain.",
};

pub const SERVICES: [Card; 2] = [
    Card {
        title: "Solar EPC and consulting services",
        body: "Expertise in Engineering, Procurement, and Construction (EPC) for solar projects of all scales, coupled with strategic consulting.",
        image: "/Sudeva Website Assets/Services/Placeholder Image.png",
        alt: "Interior construction",
    },
    Card {
        title: "Premium construction and POP finishing",
        body: "Delivering high-quality construction services and specialized Point of Purchase (POP) finishing for commercial and residential spaces.",
        image: "/Sudeva Website Assets/Services/Image.png",
        alt: "Rooftop with solar panels",
    },
];

pub const SOLAR_HEADING: Heading = Heading {
    eyebrow: Some("Solar"),
    title: "Comprehensive solar solutions for sustainable transformation",
    subtitle: None,
    lead: "Sudeva Engineers provides end-to-end solar services from feasibility to maintenance, ensuring profitable and sustainable solar adoption",
};

pub const SOLAR_SOLUTIONS: [Card; 3] = [
    Card {
        title: "Comprehensive site analysis and financial modeling",
        body: "Detailed feasibility studies that unlock solar potential for every project.",
        image: "/images/EPC1.png",
        alt: "Comprehensive site analysis and financial modeling",
    },
    Card {
        title: "Advanced PV system design and technical optimization",
        body: "Leveraging cutting-edge software to maximize solar performance and energy yield.",
        image: "/images/PVsyst.jpg",
        alt: "Advanced PV system design and technical optimization",
    },
    Card {
        title: "End-to-end EPC execution with precision",
        body: "Seamless procurement, installation, and commissioning of solar infrastructure.",
        image: "/images/EPC3.png",
        alt: "End-to-end EPC execution with precision",
    },
];

pub const CONSTRUCTION_HEADING: Heading = Heading {
    eyebrow: Some("Construction"),
    title: "Crafting spaces that breathe life and purpose",
    subtitle: None,
    lead: "From structural construction to POP interiors, Sudeva Engineers combines engineering precision with artistic design",
};

pub const CONSTRUCTION: [Card; 3] = [
    Card {
        title: "General construction for modern living",
        body: "Residential and commercial projects that meet the highest standards of quality and functionality.",
        image: "/images/conc1.png",
        alt: "General construction for modern living",
    },
    Card {
        title: "Innovative POP design and finishing",
        body: "Sculptural false ceilings and wall treatments that elevate architectural aesthetics.",
        image: "/images/conc2.png",
        alt: "Innovative POP design and finishing",
    },
    Card {
        title: "Renovation that reimagines potential",
        body: "Strategic remodeling that breathes new life into existing spaces with minimal disruption.",
        image: "/Sudeva Website Assets/Portfolio/Placeholder Image-1.png",
        alt: "Renovation that reimagines potential",
    },
];

/// Case study with tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub card: Card,
    pub tags: &'static [&'static str],
}

pub const PROJECTS_HEADING: Heading = Heading {
    eyebrow: Some("Case Studies"),
    title: "Featured engineering projects",
    subtitle: None,
    lead: "Showcasing our commitment to excellence across solar and construction domains.",
};

const INTERIOR_TAGS: &[&str] = &["Interior", "Design", "Renovation"];

pub const PROJECTS: [Project; 2] = [
    Project {
        card: Card {
            title: "Hotel Clarks Inn, Moradabad",
            body: "Executed by Sudeva Pvt. Ltd, this hotel project exemplifies our proficiency in high-quality construction and advanced POP craftsmanship, delivering durability, precision, and superior aesthetic standards.",
            image: "/Sudeva Website Assets/Portfolio/Placeholder Image.png",
            alt: "Hotel Clarks Inn",
        },
        tags: INTERIOR_TAGS,
    },
    Project {
        card: Card {
            title: "Hotel Neelkanth Star, Rajabpur",
            body: "Constructed by Sudeva Pvt. Ltd, this hotel showcases our expertise in structural precision and advanced POP finishing, reflecting our commitment to quality and engineering excellence.",
            image: "/Sudeva Website Assets/Portfolio/Placeholder Image-1.png",
            alt: "Hotel Neelkanth Star",
        },
        tags: INTERIOR_TAGS,
    },
];

pub const KNOWLEDGE_HEADING: Heading = Heading {
    eyebrow: None,
    title: "Engineering knowledge that matters",
    subtitle: None,
    lead: "Stay informed with our insights and articles on the latest trends, innovations, and best practices in engineering, solar energy, and construction.",
};

pub const KNOWLEDGE_TAG: &str = "Knowledge";

pub const KNOWLEDGE: [Card; 3] = [
    Card {
        title: "On-Grid Solar System",
        body: "Ideal for urban homes, businesses, and institutions that benefit from reliable grid access. This system reduces electricity bills by feeding excess power back to the grid and improves overall energy efficiency.",
        image: "/Sudeva Website Assets/Blog/Placeholder Image.png",
        alt: "On-Grid Solar System",
    },
    Card {
        title: "Off-Grid Solar System",
        body: "Perfect for remote areas, farms, and industries without stable grid connectivity. This setup stores excess power and ensures uninterrupted supply via battery storage.",
        image: "/Sudeva Website Assets/Blog/6.png",
        alt: "Off-Grid Solar System",
    },
    Card {
        title: "Hybrid Solar System",
        body: "Combines grid power with battery backup to provide both flexibility and resilience — ideal for commercial buildings and critical operations.",
        image: "/Sudeva Website Assets/Blog/Gemini_Generated_Image_4uzni14uzni14uzn 1.png",
        alt: "Hybrid Solar System",
    },
];

/// Knowledge cards alternate image side on wide screens.
pub fn knowledge_reversed(index: usize) -> bool {
    index % 2 == 1
}

/// Titled paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_INTRO: &str = "Sudeva Engineers provides practical, sustainable engineering across solar and construction, with a focus on quality and client outcomes.";
pub const ABOUT_IMAGE: &str = "/Sudeva Website Assets/Hero/5.png";

pub const ABOUT: [Paragraph; 2] = [
    Paragraph {
        title: "Strategic Approach",
        body: "We combine deep industry knowledge with a forward-thinking approach to tackle complex engineering challenges and deliver optimal results.",
    },
    Paragraph {
        title: "Sustainable Impact",
        body: "Committed to environmental stewardship, we integrate sustainable practices into every project, contributing to a greener future.",
    },
];

/// Team roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
}

pub const TEAM_LEAD: &str = "Meet the dedicated professionals who drive our success and embody our commitment to excellence.";

pub const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Deepak Yadav",
        role: "CEO & Director",
        bio: "Deepak Yadav, Director and CEO of Sudeva Engineers, leading advanced solar EPC solutions with strong engineering expertise. An IIT Delhi graduate, he designs efficient, high-precision solar plants using tools like PVsyst, driving the company’s focus on technology and sustainable execution.",
        photo: "/images/Team/Deepak yadav.jpeg",
    },
    TeamMember {
        name: "Suresh Yadav",
        role: "Chairman",
        bio: "Suresh Yadav, serves as the Chairman of Sudeva Engineers, bringing over 25 years of experience in high-end construction and project execution. His leadership anchors the company’s commitment to quality, reliability, and long-term trust.",
        photo: "/images/Team/Suresh Yadav.jpeg",
    },
];

/// Social network shown as an icon link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    Instagram,
    LinkedIn,
    Twitter,
    Facebook,
    YouTube,
}

impl Social {
    /// Footer order.
    pub const ALL: [Social; 5] = [
        Social::Instagram,
        Social::LinkedIn,
        Social::Twitter,
        Social::Facebook,
        Social::YouTube,
    ];

    /// Links on each team card.
    pub const TEAM: [Social; 2] = [Social::LinkedIn, Social::Twitter];

    pub fn label(&self) -> &'static str {
        match self {
            Social::Instagram => "Instagram",
            Social::LinkedIn => "LinkedIn",
            Social::Twitter => "Twitter",
            Social::Facebook => "Facebook",
            Social::YouTube => "YouTube",
        }
    }
}

/// Kind of contact channel, picks the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Phone,
    Office,
}

/// One way to reach the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub title: &'static str,
    pub detail: &'static str,
    pub action: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LEAD: &str =
    "Get in touch with us for inquiries, collaborations, or project discussions.";

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ChannelKind::Email,
        title: "Email",
        detail: "sudevaengineers@gmail.com",
        action: "Send a message",
        href: "mailto:sudevaengineers@gmail.com",
    },
    ContactChannel {
        kind: ChannelKind::Phone,
        title: "Phone",
        detail: "+91 7983581207",
        action: "Call us now",
        href: "tel:+917983581207",
    },
    ContactChannel {
        kind: ChannelKind::Office,
        title: "Office",
        detail: "7B/118 Phase 2 Buddhi Vihar, Moradabad 244001",
        action: "Get directions",
        href: "#",
    },
];

pub const LEGAL_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];

/// Every image the page shows, in page order, without duplicates.
pub fn image_paths() -> Vec<&'static str> {
    let mut paths = vec![LOGO];
    paths.extend(HERO_IMAGES);
    paths.extend(WHY_US.iter().map(|f| f.icon));
    for card in SERVICES
        .iter()
        .chain(&SOLAR_SOLUTIONS)
        .chain(&CONSTRUCTION)
        .chain(PROJECTS.iter().map(|p| &p.card))
        .chain(&KNOWLEDGE)
    {
        paths.push(card.image);
    }
    paths.push(ABOUT_IMAGE);
    paths.extend(TEAM.iter().map(|m| m.photo));

    let mut seen = HashSet::new();
    paths.retain(|path| seen.insert(*path));
    paths
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn anchors_are_unique() {
        let ids: HashSet<_> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), Anchor::ALL.len());
        assert_eq!(Anchor::Contact.href(), "#contact");
    }

    #[test]
    fn header_renames_blog_only() {
        assert_eq!(Anchor::Blog.header_label(), "Solar Solutions");
        assert_eq!(Anchor::Blog.label(), "Blog");
        assert_eq!(Anchor::Home.header_label(), "Home");
    }

    #[test]
    fn image_paths_are_site_absolute() {
        for card in SERVICES
            .iter()
            .chain(&SOLAR_SOLUTIONS)
            .chain(&CONSTRUCTION)
            .chain(&KNOWLEDGE)
            .chain(PROJECTS.iter().map(|p| &p.card))
        {
            assert!(card.image.starts_with('/'), "{}", card.image);
        }
        for path in HERO_IMAGES.iter().chain(TEAM.iter().map(|m| &m.photo)) {
            assert!(path.starts_with('/'), "{path}");
        }
    }

    #[test]
    fn image_paths_cover_every_section() {
        let paths = image_paths();
        let mut expected = vec![LOGO, ABOUT_IMAGE];
        expected.extend(HERO_IMAGES);
        expected.extend(WHY_US.iter().map(|f| f.icon));
        expected.extend(SERVICES.iter().map(|c| c.image));
        expected.extend(SOLAR_SOLUTIONS.iter().map(|c| c.image));
        expected.extend(CONSTRUCTION.iter().map(|c| c.image));
        expected.extend(PROJECTS.iter().map(|p| p.card.image));
        expected.extend(KNOWLEDGE.iter().map(|c| c.image));
        expected.extend(TEAM.iter().map(|m| m.photo));

        for path in expected {
            assert!(paths.contains(&path), "{path} not listed");
        }
        assert!(paths.contains(&"/images/EPC1.png"));
        assert!(paths.contains(&"/Sudeva Website Assets/Blog/6.png"));

        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        assert_eq!(paths[0], LOGO);
    }

    #[test]
    fn knowledge_alternates() {
        let flags: Vec<_> = (0..KNOWLEDGE.len()).map(knowledge_reversed).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn contact_links_are_static() {
        assert!(CONTACT_CHANNELS[0].href.starts_with("mailto:"));
        assert!(CONTACT_CHANNELS[1].href.starts_with("tel:"));
    }
}
