//! Static copy for the landing page. Everything the template shows
//! comes from here.
use serde::Serialize;

pub const PHONE_DISPLAY: &str = "0802 360 9696";
pub const PHONE_HREF: &str = "tel:08023609696";

#[derive(Clone, Debug, Serialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Hero {
    pub badge: String,
    pub subtitle: String,
    pub background_image: String,
    pub rating: String,
    pub review_count: String,
    pub highlight: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct About {
    pub image: String,
    pub body: String,
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub is_popular: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone_display: String,
    pub phone_href: String,
    pub whatsapp: String,
    pub hours: Vec<String>,
    pub map_embed_url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SiteContent {
    pub brand: String,
    pub legal_name: String,
    pub nav_links: Vec<NavLink>,
    pub hero: Hero,
    pub marquee: Vec<String>,
    pub features: Vec<Feature>,
    pub about: About,
    pub services: Vec<Service>,
    pub plans: Vec<PricingPlan>,
    pub testimonials: Vec<Testimonial>,
    pub average_rating: String,
    pub contact: ContactInfo,
    pub footer_links: Vec<NavLink>,
}

fn link(name: &str, href: &str) -> NavLink {
    NavLink {
        name: name.to_string(),
        href: href.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SiteContent {
    pub fn popular_plan(&self) -> Option<&PricingPlan> {
        self.plans.iter().find(|p| p.is_popular)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        let nav_links = vec![
            link("About", "#about"),
            link("Features", "#features"),
            link("Services", "#services"),
            link("Plans", "#plans"),
            link("Contact", "#contact"),
        ];

        let hero = Hero {
            badge: String::from("The Best Gym in Ikeja"),
            subtitle: String::from(
                "A fully equipped fitness and lifestyle centre in the heart of Ikeja. Join the elite community pushing limits every day.",
            ),
            background_image: String::from(
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?auto=format&fit=crop&q=80&w=2070",
            ),
            rating: String::from("4.2/5"),
            review_count: String::from("85+ Reviews"),
            highlight: String::from("Premium Equipment"),
        };

        let features = vec![
            Feature {
                icon: String::from("dumbbell"),
                title: String::from("Full Access"),
                description: String::from(
                    "Unlimited usage of all modern training gear and equipment.",
                ),
            },
            Feature {
                icon: String::from("users"),
                title: String::from("Pro Instructors"),
                description: String::from(
                    "Expert guidance for weight loss, muscle gain, and general fitness.",
                ),
            },
            Feature {
                icon: String::from("clock"),
                title: String::from("Flexible Hours"),
                description: String::from(
                    "Open Mon\u{2013}Sat (7am\u{2013}9pm) to fit your busy Nigerian lifestyle.",
                ),
            },
            Feature {
                icon: String::from("shield"),
                title: String::from("Safe Parking"),
                description: String::from(
                    "Spacious and secure free parking area for all our members.",
                ),
            },
        ];

        let about = About {
            image: String::from(
                "https://images.unsplash.com/photo-1541534741688-6078c6bfb5c5?auto=format&fit=crop&q=80&w=800",
            ),
            body: String::from(
                "Surefit Gym and Fitness Centre is a standalone fitness and lifestyle hub dedicated to helping you achieve real results. With modern equipment, certified instructors, and a welcoming environment, we support men and women of all ages on their fitness journey.",
            ),
            highlights: strings(&[
                "Over 10 Years of Excellence in Ikeja",
                "Gender Inclusive Training Environment",
                "Corporate Wellness Packages Available",
            ]),
        };

        let services = vec![
            Service {
                icon: String::from("dumbbell"),
                title: String::from("Strength Training"),
                description: String::from(
                    "Heavy-duty racks, benches, and machines for serious muscle building.",
                ),
                image: String::from(
                    "https://plus.unsplash.com/premium_photo-1664304106292-ef7e34f74dc0?q=80&w=870&auto=format&fit=crop&q=80&w=800",
                ),
            },
            Service {
                icon: String::from("zap"),
                title: String::from("Cardio Blast"),
                description: String::from(
                    "Modern treadmills and elliptical gear for endurance and weight loss.",
                ),
                image: String::from(
                    "https://images.unsplash.com/photo-1540497077202-7c8a3999166f?auto=format&fit=crop&q=80&w=800",
                ),
            },
            Service {
                icon: String::from("users"),
                title: String::from("Personal Coaching"),
                description: String::from(
                    "Get 1-on-1 attention from certified Nigerian fitness experts.",
                ),
                image: String::from(
                    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&q=80&w=800",
                ),
            },
        ];

        let plans = vec![
            PricingPlan {
                name: String::from("Monthly Basic"),
                price: String::from("\u{20a6}"),
                features: strings(&[
                    "Full Gym Access",
                    "Gym Instructor",
                    "Standard Hours",
                    "Free Parking",
                ]),
                is_popular: false,
            },
            PricingPlan {
                name: String::from("VIP Yearly"),
                price: String::from("\u{20a6}"),
                features: strings(&[
                    "Unlimited Access",
                    "Priority Coaching",
                    "Nutrition Guide",
                    "Guest Passes",
                ]),
                is_popular: true,
            },
            PricingPlan {
                name: String::from("Corporate"),
                price: String::from("Call"),
                features: strings(&[
                    "Group Sessions",
                    "Employee Tracking",
                    "Custom Workouts",
                    "Dedicated Trainer",
                ]),
                is_popular: false,
            },
        ];

        let testimonials = vec![
            Testimonial {
                name: String::from("Chidi O."),
                rating: 5,
                comment: String::from(
                    "Warm staff, great equipment, and a motivating environment. Highly recommended for anyone in Oregun.",
                ),
            },
            Testimonial {
                name: String::from("Bolu T."),
                rating: 5,
                comment: String::from(
                    "Spacious, clean, and worth every naira. The trainers actually know what they are doing.",
                ),
            },
            Testimonial {
                name: String::from("Funmi A."),
                rating: 5,
                comment: String::from(
                    "Best gym experience in Lagos. Safe parking is a huge plus for me!",
                ),
            },
        ];

        let contact = ContactInfo {
            address: String::from(
                "By First Bank Bus Stop, 2 Adewunmi Estate, Kudirat Abiola Way, Opposite The Citadel Church, Oregun, Ikeja, Lagos.",
            ),
            phone_display: PHONE_DISPLAY.to_string(),
            phone_href: PHONE_HREF.to_string(),
            whatsapp: String::from("Available 24/7"),
            hours: strings(&[
                "Mon \u{2013} Sat: 7:00 AM \u{2013} 9:00 PM",
                "Sun: Closed",
            ]),
            map_embed_url: String::from(
                "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3963.268711684364!2d3.3644026117381285!3d6.613481221980868!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x103b930d4b1a1c97%3A0x868b8e0c3b0f5b90!2sKudirat%20Abiola%20Way%2C%20Oregun%2C%20Ikeja%2C%20Lagos!5e0!3m2!1sen!2sng!4v1714578120349!5m2!1sen!2sng",
            ),
        };

        Self {
            brand: String::from("SUREFIT"),
            legal_name: String::from("Surefit Gym And Fitness Centre"),
            nav_links,
            hero,
            marquee: strings(&[
                "Surefit Gym",
                "Ikeja's Best",
                "Transform Your Body",
                "No Pain No Gain",
            ]),
            features,
            about,
            services,
            plans,
            testimonials,
            average_rating: String::from("4.2/5 Average Google Rating"),
            contact,
            footer_links: vec![
                link("Instagram", "#"),
                link("Facebook", "#"),
                link("Privacy Policy", "#"),
            ],
        }
    }
}
