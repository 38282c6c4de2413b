//! Static site content, defined once.
//!
//! Every page renders from these tables; nothing here mutates at runtime.
//! The skill categories in particular exist exactly once - the skills page
//! and the home overview both read from this module rather than carrying
//! their own copies.

/// Icon names from the Lucide set, rendered inline by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Brain,
    CheckCircle,
    ChevronDown,
    ChevronUp,
    Code,
    Download,
    ExternalLink,
    FileText,
    Github,
    Heart,
    Home,
    Lightbulb,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Moon,
    PenTool,
    Phone,
    Rocket,
    Search,
    Send,
    Sun,
    Target,
    Users,
    X,
}

// === Identity ===
pub const OWNER_NAME: &str = "Prathamesh Wakde";
pub const SITE_URL: &str = "https://prathameshwakde.com";
pub const ROLE: &str = "Full Stack AI Developer & Freelancing Leader";
pub const HERO_INTRO: &str =
    "Building dynamic, intelligent web experiences with precision, innovation, and a dedicated team.";
pub const OVERVIEW: &str = "I'm Prathamesh Wakde, a Full Stack AI Developer specializing in creating interactive, intelligent web experiences. With 6\u{2013}7 key projects and a dedicated freelancing team, I turn innovative ideas into reality.";
pub const YEARS_BADGE: &str = "2+ Years";

pub const EMAIL: &str = "wakdeprathamesh12@gmail.com";
pub const PHONE: &str = "+91 9175686589";
pub const LOCATION: &str = "Pune, India";
pub const GITHUB_URL: &str = "https://github.com/Wakdeprathamesh";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/prathamesh-wakde-479b09236/";

/// Formspree form identifier the contact page delivers to.
pub const CONTACT_FORM_ID: &str = "xzzebeek";

/// A social profile shown in the hero and the footer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: Icon::Github,
        url: GITHUB_URL,
    },
    SocialLink {
        name: "LinkedIn",
        icon: Icon::Linkedin,
        url: LINKEDIN_URL,
    },
    SocialLink {
        name: "Email",
        icon: Icon::Mail,
        url: "mailto:wakdeprathamesh12@gmail.com",
    },
];

/// One of the three overview cards on the home page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::Code,
        title: "Full Stack Development",
        description: "Building end-to-end web applications with modern technologies",
    },
    Highlight {
        icon: Icon::Brain,
        title: "AI Integration",
        description: "Implementing intelligent solutions and AI-powered features",
    },
    Highlight {
        icon: Icon::Rocket,
        title: "Team Leadership",
        description: "Leading a talented freelancing team to deliver excellence",
    },
];

/// A portfolio project. `featured` entries also appear on the home page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub features: &'static [&'static str],
    pub highlight: &'static str,
    pub demo_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AyurMarg (In Progress)",
        description: "AI-powered Ayurvedic health assistant that blends ancient Ayurvedic principles with modern AI solutions to offer personalized health insights.",
        image_url: "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?auto=format&fit=crop&q=80&w=1000",
        tags: &["React", "Node.js", "MongoDB", "DeepSeek R1", "GSAP", "Locomotive Scroll"],
        features: &[
            "Dynamic Dosha Analysis Test",
            "AI-driven health and lifestyle recommendations",
            "Smooth parallax scrolling and micro-interactions",
            "Ayurvedic search engine with verified insights",
        ],
        highlight: "Combines AI with healthcare, showcasing technical depth and domain expertise.",
        demo_url: "https://demo.example.com",
        github_url: "https://github.com/Wakdeprathamesh",
        featured: true,
    },
    Project {
        title: "Expiry-Based Discount System",
        description: "Developed a system for businesses to automate discounting based on product expiry dates, reducing waste and increasing sales.",
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&q=80&w=1000",
        tags: &["Node.js", "Express.js", "MongoDB", "React"],
        features: &[
            "Real-time product tracking",
            "Automated discount generation based on expiry date",
            "Secure data handling and real-time updates",
        ],
        highlight: "A practical business solution with measurable financial benefits.",
        demo_url: "https://demo.example.com",
        github_url: "https://github.com/Wakdeprathamesh",
        featured: false,
    },
    Project {
        title: "Gen AI-Enabled Dashboard",
        description: "Built an AI-enabled dashboard that generates real-time business insights and predictive analytics using Generative AI.",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=1000",
        tags: &["React", "Node.js", "MongoDB", "OpenAI API"],
        features: &[
            "AI-driven data analysis and trend predictions",
            "Customizable UI with real-time chart updates",
            "Natural language-based query interface",
        ],
        highlight: "Blends AI and business intelligence for data-driven decision-making.",
        demo_url: "https://demo.example.com",
        github_url: "https://github.com/Wakdeprathamesh",
        featured: true,
    },
    Project {
        title: "AI-Based Automatic Website Builder",
        description: "Developed a web builder that generates fully functional websites based on user instructions using AI.",
        image_url: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?auto=format&fit=crop&q=80&w=1000",
        tags: &["React (Vite)", "Node.js", "Express.js", "Gemini API", "MongoDB"],
        features: &[
            "Real-time AI-based design suggestions",
            "Auto-generated web content and structure",
            "User customization with live preview",
        ],
        highlight: "Showcases AI and frontend-backend integration expertise.",
        demo_url: "https://demo.example.com",
        github_url: "https://github.com/Wakdeprathamesh",
        featured: true,
    },
    Project {
        title: "Restaurant Ordering System",
        description: "Created an online restaurant ordering system with real-time order tracking and payment integration.",
        image_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?auto=format&fit=crop&q=80&w=1000",
        tags: &["React", "Node.js", "MongoDB", "Stripe API"],
        features: &[
            "Order status tracking",
            "Secure payment gateway",
            "Mobile-responsive design",
        ],
        highlight: "A high-traffic handling system with secure transaction flow.",
        demo_url: "https://demo.example.com",
        github_url: "https://github.com/Wakdeprathamesh",
        featured: false,
    },
    Project {
        title: "Smart Parking & Car Pooling",
        description: "Built an AI-powered platform that allows real-time parking spot availability and carpooling suggestions.",
        image_url: "https://images.unsplash.com/photo-1573648952759-5785fba4ded8?auto=format&fit=crop&q=80&w=1000",
        tags: &["React", "Node.js", "MongoDB", "OpenStreetMap API"],
        features: &[
            "AI-based real-time parking spot availability",
            "Smart carpooling route suggestions",
            "User authentication and feedback system",
        ],
        highlight: "Demonstrates AI and real-time data handling skills.",
        demo_url: "https://demo.example.com",
        github_url: "https://github.com/Wakdeprathamesh",
        featured: false,
    },
];

/// The projects promoted to the home page.
pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// A step on the About page's career timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2021",
        title: "Co-founder & CTO - MillionaireMentality",
        description: "Launched an EdTech platform focused on financial literacy and entrepreneurial skills. Scaled it to significant revenue before strategic closure.",
        icon: Icon::Rocket,
    },
    TimelineEntry {
        year: "2022",
        title: "Full-Stack Developer - PHN Technologies",
        description: "Worked on high-performance web applications and scalable backend solutions.",
        icon: Icon::Code,
    },
    TimelineEntry {
        year: "2023",
        title: "Freelancer | Head of Writing & Poetry Club",
        description: "Led creative and technical projects, blending art and code. Built a freelancing team focused on AI-driven web solutions.",
        icon: Icon::Users,
    },
    TimelineEntry {
        year: "2024",
        title: "Gen AI & BI Intern - Cognizant",
        description: "Integrated AI models into enterprise systems, optimizing backend performance.",
        icon: Icon::Brain,
    },
    TimelineEntry {
        year: "2025",
        title: "Building AyurMarg | Hackathons",
        description: "Developing an AI-powered Ayurvedic health assistant while actively participating in hackathons and freelancing.",
        icon: Icon::Lightbulb,
    },
];

/// A core value card on the About page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[ValueCard] = &[
    ValueCard {
        icon: Icon::Heart,
        title: "Passion for Innovation",
        description: "Driven by the desire to create cutting-edge solutions",
    },
    ValueCard {
        icon: Icon::Users,
        title: "Team Collaboration",
        description: "Believe in the power of collaborative development",
    },
    ValueCard {
        icon: Icon::Target,
        title: "Goal-Oriented",
        description: "Focused on delivering measurable results",
    },
];

/// A downloadable resume variant on the About page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResumeLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const RESUMES: &[ResumeLink] = &[
    ResumeLink {
        label: "Technical/AI Resume",
        href: "/assets/resume/ai-powered-full-stack-engineer.pdf",
    },
    ResumeLink {
        label: "Business/Product Resume",
        href: "/assets/resume/Product_Resume.pdf",
    },
];

/// One skill tile within a category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
}

/// A titled group of skills with its accent gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    /// CSS gradient stops for the category's tiles.
    pub gradient: (&'static str, &'static str),
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "technical",
        title: "Technical Skills",
        icon: Icon::Code,
        gradient: ("#3b82f6", "#22d3ee"),
        skills: &[
            Skill { name: "HTML", description: "Semantic markup and structure" },
            Skill { name: "CSS", description: "Styling and responsive design" },
            Skill { name: "JavaScript", description: "Modern JavaScript programming" },
            Skill { name: "React", description: "Component-based UI development" },
            Skill { name: "Node.js", description: "JavaScript runtime for server-side development" },
            Skill { name: "Express.js", description: "Web application framework for Node.js" },
            Skill { name: "MongoDB", description: "NoSQL database for modern applications" },
            Skill { name: "REST APIs", description: "RESTful API design and implementation" },
            Skill { name: "FastAPI", description: "Modern, fast web framework for Python" },
            Skill { name: "Vite", description: "Next-generation frontend tooling" },
            Skill { name: "Tailwind CSS", description: "Utility-first CSS framework" },
            Skill { name: "Git", description: "Version control system" },
            Skill { name: "GitHub", description: "Collaboration and version control platform" },
            Skill { name: "VS Code", description: "Code editor" },
            Skill { name: "Postman", description: "API development and testing" },
            Skill { name: "SQL", description: "Relational database query language" },
            Skill { name: "Firebase", description: "Backend-as-a-Service platform" },
            Skill { name: "MongoDB Atlas", description: "Cloud database service" },
            Skill { name: "Python", description: "General-purpose programming language" },
            Skill { name: "C++", description: "High-performance programming language" },
            Skill { name: "GSAP", description: "Advanced animations with GreenSock" },
            Skill { name: "Locomotive Scroll", description: "Smooth scrolling library" },
            Skill { name: "Framer Motion", description: "React animation library" },
        ],
    },
    SkillCategory {
        id: "ai",
        title: "AI & Machine Learning",
        icon: Icon::Brain,
        gradient: ("#a855f7", "#a78bfa"),
        skills: &[
            Skill { name: "RAG Architecture", description: "Retrieval-Augmented Generation" },
            Skill { name: "FAISS", description: "Vector similarity search library" },
            Skill { name: "Langchain", description: "Framework for LLM applications" },
            Skill { name: "DeepSeek", description: "Large language model integration" },
            Skill { name: "Gemini API", description: "Google's multimodal AI model" },
            Skill { name: "Llama Models", description: "Open-source large language models" },
            Skill { name: "LangGraph", description: "Graph-based LLM orchestration" },
            Skill { name: "MCP Servers", description: "Model control protocol servers" },
            Skill { name: "Agentic AI", description: "AI agent development and orchestration" },
            Skill { name: "Python", description: "Primary language for ML development" },
            Skill { name: "PyTorch (CUDA)", description: "Deep learning framework with GPU acceleration" },
            Skill { name: "HuggingFace", description: "Transformers library and model hub" },
            Skill { name: "Prompt Engineering", description: "Designing effective prompts for LLMs" },
            Skill { name: "OpenAI API", description: "Integration with OpenAI services" },
        ],
    },
    SkillCategory {
        id: "product",
        title: "Product & Business Skills",
        icon: Icon::Lightbulb,
        gradient: ("#f59e0b", "#facc15"),
        skills: &[
            Skill { name: "Product Ideation", description: "Generating and refining product ideas" },
            Skill { name: "Prototyping", description: "Creating functional product prototypes" },
            Skill { name: "MVP Development", description: "Building minimum viable products" },
            Skill { name: "User Journey Mapping", description: "Mapping user experiences and interactions" },
            Skill { name: "UX Focus", description: "User-centered design approach" },
            Skill { name: "Feature Roadmapping", description: "Planning product feature development" },
            Skill { name: "Prioritization", description: "Evaluating and prioritizing features" },
            Skill { name: "Market Research", description: "Analyzing market trends and opportunities" },
            Skill { name: "Competitor Analysis", description: "Evaluating competitive landscape" },
        ],
    },
    SkillCategory {
        id: "hr",
        title: "People & HR Skills",
        icon: Icon::Users,
        gradient: ("#ec4899", "#fb7185"),
        skills: &[
            Skill { name: "Talent Acquisition", description: "Recruiting and hiring processes" },
            Skill { name: "Onboarding", description: "New employee integration processes" },
            Skill { name: "HR Operations", description: "Day-to-day HR management" },
            Skill { name: "Employee Engagement", description: "Fostering workplace satisfaction" },
            Skill { name: "Culture Building", description: "Developing positive workplace culture" },
            Skill { name: "Internal Communication", description: "Effective organizational communication" },
            Skill { name: "Team Coordination", description: "Managing team dynamics and workflow" },
            Skill { name: "Leadership Support", description: "Assisting leadership teams" },
        ],
    },
    SkillCategory {
        id: "creative",
        title: "Creative & Communication",
        icon: Icon::PenTool,
        gradient: ("#14b8a6", "#4ade80"),
        skills: &[
            Skill { name: "Personal Branding", description: "Developing professional brand identity" },
            Skill { name: "Storytelling", description: "Narrative creation and delivery" },
            Skill { name: "Content Writing", description: "Blogs, documentation, and copy" },
            Skill { name: "UI Design", description: "Basics of interface design" },
            Skill { name: "Figma", description: "Design and prototyping tool" },
            Skill { name: "Canva", description: "Graphic design platform" },
            Skill { name: "Public Speaking", description: "Presentation and public address skills" },
            Skill { name: "Community Building", description: "Growing and nurturing communities" },
            Skill { name: "Collaboration", description: "Working effectively with others" },
        ],
    },
];

/// A contact channel card on the contact page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: Icon::Mail,
        title: "Email",
        value: EMAIL,
        link: "mailto:wakdeprathamesh12@gmail.com",
    },
    ContactChannel {
        icon: Icon::Phone,
        title: "Phone",
        value: PHONE,
        link: "tel:+919175686589",
    },
    ContactChannel {
        icon: Icon::MapPin,
        title: "Location",
        value: LOCATION,
        link: "https://maps.google.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exactly_three_projects_are_featured() {
        assert_eq!(featured_projects().count(), 3);
    }

    #[test]
    fn skill_category_ids_are_unique_and_nonempty() {
        let ids: HashSet<_> = SKILL_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), SKILL_CATEGORIES.len());
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn every_project_has_tags_and_features() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(!project.features.is_empty(), "{} has no features", project.title);
        }
    }
}
