//! src/domain/feature.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    Users,
    Calendar,
    Mail,
    PhoneCall,
    Camera,
    CheckCircle,
    DollarSign,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Sparkles => "sparkles",
            Icon::Users => "users",
            Icon::Calendar => "calendar",
            Icon::Mail => "mail",
            Icon::PhoneCall => "phone-call",
            Icon::Camera => "camera",
            Icon::CheckCircle => "check-circle",
            Icon::DollarSign => "dollar-sign",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sparkles => "✨",
            Icon::Users => "👥",
            Icon::Calendar => "📅",
            Icon::Mail => "✉️",
            Icon::PhoneCall => "📞",
            Icon::Camera => "📷",
            Icon::CheckCircle => "✅",
            Icon::DollarSign => "💲",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 8] = [
    Feature {
        icon: Icon::Sparkles,
        title: "Group-Tailored Experiences",
        description: "Discover the perfect lineup that caters to everyone's vibe and preferences.",
    },
    Feature {
        icon: Icon::Users,
        title: "Effortless Group Coordination",
        description: "Manage RSVPs and keep your crew in sync without the endless group chat messages.",
    },
    Feature {
        icon: Icon::Calendar,
        title: "Seamless Group Bookings",
        description: "We handle reservations for your entire group, so you can focus on the fun, not the logistics.",
    },
    Feature {
        icon: Icon::Mail,
        title: "Smart Group Notifications",
        description: "Keep everyone in the loop with timely reminders and your full night's itinerary.",
    },
    Feature {
        icon: Icon::PhoneCall,
        title: "Real-Time Group Support",
        description: "Get assistance for unexpected changes, ensuring your whole group stays on track.",
    },
    Feature {
        icon: Icon::Camera,
        title: "Shared Memories",
        description: "Easily collect and share the night's best moments with your entire group.",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Group Night Navigator",
        description: "Everyone knows what's next on your epic group night out adventure.",
    },
    Feature {
        icon: Icon::DollarSign,
        title: "Fair Group Expense Splitting",
        description: "Split bills easily and fairly, eliminating post-night-out money awkwardness.",
    },
];
