//! Marketing copy for the landing page sections

pub const COMPANY_NAME: &str = "CarryPack Logistics";
pub const TAGLINE: &str = "Professional Moving & Logistic Services";
pub const HELPLINE: &str = "+91 98765 43210";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub highlights: [&'static str; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CityTier {
    Metro,
    Tier1,
    Tier2,
}

impl CityTier {
    pub fn label(&self) -> &'static str {
        match self {
            CityTier::Metro => "Metro",
            CityTier::Tier1 => "Tier 1",
            CityTier::Tier2 => "Tier 2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub state: &'static str,
    pub tier: CityTier,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
    Stat { value: "5000+", label: "Successful Moves", icon: "truck" },
    Stat { value: "50+", label: "Cities Covered", icon: "map-pin" },
    Stat { value: "24/7", label: "Customer Support", icon: "clock" },
    Stat { value: "98%", label: "Client Satisfaction", icon: "shield" },
];

pub const ABOUT_FEATURES: [Feature; 4] = [
    Feature {
        title: "Professional Team",
        description: "Trained professionals with years of moving experience",
        icon: "truck",
    },
    Feature {
        title: "Safe & Secure",
        description: "Fully insured services with damage protection",
        icon: "shield",
    },
    Feature {
        title: "24/7 Support",
        description: "Round-the-clock customer service assistance",
        icon: "users",
    },
    Feature {
        title: "Award Winning",
        description: "Recognized as best moving service provider",
        icon: "award",
    },
];

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { value: "12+", label: "Years Experience", icon: "award" },
    Stat { value: "50K+", label: "Happy Customers", icon: "smile" },
    Stat { value: "100+", label: "Cities Covered", icon: "map-pin" },
    Stat { value: "500+", label: "Expert Staff", icon: "users" },
];

pub const MISSION: &str = "To provide safe, reliable and affordable relocation services \
    that take the stress out of moving for every family and business we serve.";

pub const VISION: &str = "To become India's most trusted and preferred moving partner, \
    setting new standards in the logistics industry through technology, \
    customer-centric approach, and sustainable practices.";

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Separate & Sharing",
        description: "Flexible moving solutions for shared spaces or partial relocations, \
            ensuring smooth coordination and cost-effective transport.",
        icon: "home",
        highlights: ["Room-wise packing", "Shared space logistics", "Partial move solutions"],
    },
    Service {
        title: "Packing & Moving",
        description: "Complete end-to-end relocation services with professional packing, \
            secure transportation, and careful delivery of your belongings.",
        icon: "package",
        highlights: ["Professional packing", "Material provided", "Item categorization"],
    },
    Service {
        title: "Loading & Unloading",
        description: "Skilled manpower equipped with modern tools to safely load and unload \
            your items with maximum care and efficiency.",
        icon: "truck",
        highlights: ["Trained manpower", "Safety equipment", "Damage protection"],
    },
    Service {
        title: "Car & Bike Transport",
        description: "Reliable vehicle transportation services with secure handling, \
            insurance coverage, and real-time tracking for peace of mind.",
        icon: "car",
        highlights: ["Door-to-door service", "Insurance covered", "Real-time tracking"],
    },
];

pub const INDUSTRIES: [Feature; 6] = [
    Feature {
        title: "IT & Consumer Electronics",
        description: "Anti-static packing and shock-safe transport for servers, laptops and appliances.",
        icon: "monitor",
    },
    Feature {
        title: "Residential",
        description: "Household shifting for apartments and villas, packed room by room.",
        icon: "home",
    },
    Feature {
        title: "Corporate",
        description: "Office relocations planned around your working hours.",
        icon: "briefcase",
    },
    Feature {
        title: "Educational",
        description: "Labs, libraries and campus furniture moved between terms.",
        icon: "book",
    },
    Feature {
        title: "Retail",
        description: "Store fit-outs, stock transfers and showroom moves.",
        icon: "shopping-bag",
    },
    Feature {
        title: "Industrial",
        description: "Heavy machinery and industrial equipment transportation.",
        icon: "factory",
    },
];

pub const NETWORK_STATS: [Stat; 4] = [
    Stat { value: "Pan-India", label: "Coverage", icon: "globe" },
    Stat { value: "8+ Cities", label: "Tier 1", icon: "map-pin" },
    Stat { value: "70+ Cities", label: "Tier 2 & 3", icon: "map" },
    Stat { value: "28 States", label: "States", icon: "flag" },
];

pub const MAJOR_CITIES: [City; 12] = [
    City { name: "Mumbai", state: "Maharashtra", tier: CityTier::Metro },
    City { name: "Delhi", state: "Delhi", tier: CityTier::Metro },
    City { name: "Bangalore", state: "Karnataka", tier: CityTier::Metro },
    City { name: "Chennai", state: "Tamil Nadu", tier: CityTier::Metro },
    City { name: "Kolkata", state: "West Bengal", tier: CityTier::Metro },
    City { name: "Hyderabad", state: "Telangana", tier: CityTier::Metro },
    City { name: "Pune", state: "Maharashtra", tier: CityTier::Tier1 },
    City { name: "Ahmedabad", state: "Gujarat", tier: CityTier::Tier1 },
    City { name: "Jaipur", state: "Rajasthan", tier: CityTier::Tier2 },
    City { name: "Lucknow", state: "Uttar Pradesh", tier: CityTier::Tier2 },
    City { name: "Chandigarh", state: "Punjab", tier: CityTier::Tier2 },
    City { name: "Bhopal", state: "Madhya Pradesh", tier: CityTier::Tier2 },
];

pub const FAQ_ENTRIES: [FaqEntry; 8] = [
    FaqEntry {
        question: "How far in advance should I book my move?",
        answer: "We recommend booking at least 2-3 weeks in advance, especially during peak moving \
            seasons (summer months and weekends). For last-minute moves, contact us directly and \
            we'll do our best to accommodate your request.",
    },
    FaqEntry {
        question: "What items are not allowed to be transported?",
        answer: "We cannot transport hazardous materials, flammable items, perishable food, plants, \
            pets, or valuable items like jewelry and important documents. Please make separate \
            arrangements for these items.",
    },
    FaqEntry {
        question: "Do you provide packing materials?",
        answer: "Yes, we provide high-quality packing materials including boxes, bubble wrap, \
            packing paper, tape, and mattress covers. These can be included in your moving package.",
    },
    FaqEntry {
        question: "How is the cost calculated?",
        answer: "Cost is calculated based on distance, volume of items, services required (packing, \
            loading, etc.), and any special requirements. We provide transparent quotes with no \
            hidden charges.",
    },
    FaqEntry {
        question: "Is my belongings insured during transit?",
        answer: "Yes, all our moves come with basic insurance coverage. Additional insurance options \
            are available for valuable items. We provide full documentation of insurance coverage.",
    },
    FaqEntry {
        question: "Can you help with vehicle transportation?",
        answer: "Yes, we specialize in car and bike transportation across India. We use enclosed \
            carriers and provide real-time tracking for your vehicle.",
    },
    FaqEntry {
        question: "What if I need storage for some items?",
        answer: "We offer secure, climate-controlled storage facilities for short-term and long-term \
            needs. Our storage facilities have 24/7 security and CCTV surveillance.",
    },
    FaqEntry {
        question: "Do you provide packing and unpacking services?",
        answer: "Yes, we offer complete packing and unpacking services. Our team will carefully pack \
            your items, transport them, and unpack them at your new location.",
    },
];

pub const FOOTER_SERVICES: [&str; 6] = [
    "Packing & Moving",
    "Loading & Unloading",
    "Car & Bike Transport",
    "Storage & Warehouse",
    "Office Relocation",
    "Separate & Sharing",
];

pub const TRUST_BADGES: [Feature; 3] = [
    Feature { title: "Verified Partners", description: "", icon: "check-circle" },
    Feature { title: "Insurance Covered", description: "", icon: "shield" },
    Feature { title: "24/7 Support", description: "", icon: "headphones" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink { label: "Facebook", href: "https://facebook.com/", icon: "facebook" },
    SocialLink { label: "Twitter", href: "https://twitter.com/", icon: "twitter" },
    SocialLink { label: "Instagram", href: "https://instagram.com/", icon: "instagram" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com/", icon: "linkedin" },
    SocialLink { label: "YouTube", href: "https://youtube.com/", icon: "youtube" },
];
