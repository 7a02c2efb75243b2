//! Builtin sample catalog: New York restaurants grouped into candidate pools.

use super::Catalog;
use crate::listing::{Coordinates, Listing, PriceTier, RatingBreakdown};

struct Seed {
    id: &'static str,
    name: &'static str,
    address: &'static str,
    rating: f64,
    review_count: u32,
    categories: &'static [&'static str],
    price: PriceTier,
    average_price: f64,
    description: &'static str,
    image_url: &'static str,
    neighborhood: &'static str,
    cuisine_type: &'static str,
    latitude: f64,
    longitude: f64,
    ratings: (f64, f64, f64),
}

impl Seed {
    fn to_listing(&self, sponsored: bool) -> Listing {
        let (food, service, ambience) = self.ratings;
        Listing {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            address: self.address.to_owned(),
            rating: self.rating,
            review_count: self.review_count,
            categories: self.categories.iter().map(|c| (*c).to_owned()).collect(),
            price: self.price,
            average_price: self.average_price,
            description: self.description.to_owned(),
            image_url: self.image_url.to_owned(),
            neighborhood: self.neighborhood.to_owned(),
            cuisine_type: self.cuisine_type.to_owned(),
            coordinates: Coordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            ratings: RatingBreakdown {
                food,
                service,
                ambience,
            },
            sponsored,
        }
    }
}

fn pool(seeds: &[Seed]) -> Vec<Listing> {
    seeds.iter().map(|s| s.to_listing(false)).collect()
}

pub(super) fn builtin() -> Catalog {
    Catalog {
        sponsored: SPONSORED.to_listing(true),
        popular: pool(POPULAR),
        try_new: pool(TRY_NEW),
        discover: pool(DISCOVER),
        seasonal: pool(SEASONAL),
        personalized: pool(PERSONALIZED),
    }
}

const SPONSORED: Seed = Seed {
    id: "ad-1",
    name: "Le Bernardin",
    address: "155 W 51st St, Midtown Manhattan",
    rating: 9.6,
    review_count: 2450,
    categories: &["Sponsored", "Seafood", "Fine Dining"],
    price: PriceTier::Upscale,
    average_price: 180.0,
    description: "Michelin-starred seafood restaurant by Chef Eric Ripert, with elegant decor and exquisite tasting menus.",
    image_url: "https://images.pexels.com/photos/262978/pexels-photo-262978.jpeg",
    neighborhood: "Midtown",
    cuisine_type: "Seafood",
    latitude: 40.7614,
    longitude: -73.9814,
    ratings: (9.8, 9.5, 9.6),
};

const POPULAR: &[Seed] = &[
    Seed {
        id: "1",
        name: "Katz's Delicatessen",
        address: "205 E Houston St, Lower East Side",
        rating: 9.2,
        review_count: 3250,
        categories: &["Deli", "American", "Sandwiches"],
        price: PriceTier::Moderate,
        average_price: 25.0,
        description: "Famous for their pastrami sandwiches, this iconic deli has been serving New York since 1888.",
        image_url: "https://images.pexels.com/photos/1633525/pexels-photo-1633525.jpeg",
        neighborhood: "Lower East Side",
        cuisine_type: "Deli",
        latitude: 40.7223,
        longitude: -73.9874,
        ratings: (9.5, 8.8, 8.9),
    },
    Seed {
        id: "2",
        name: "Peter Luger Steak House",
        address: "178 Broadway, Williamsburg, Brooklyn",
        rating: 9.4,
        review_count: 2890,
        categories: &["Steakhouse", "American", "Fine Dining"],
        price: PriceTier::Upscale,
        average_price: 115.0,
        description: "Legendary steakhouse serving dry-aged beef since 1887 in a beer-hall-style setting.",
        image_url: "https://images.pexels.com/photos/3535383/pexels-photo-3535383.jpeg",
        neighborhood: "Williamsburg",
        cuisine_type: "Steakhouse",
        latitude: 40.7099,
        longitude: -73.9622,
        ratings: (9.7, 9.0, 9.1),
    },
    Seed {
        id: "3",
        name: "Eleven Madison Park",
        address: "11 Madison Ave, Flatiron District",
        rating: 9.7,
        review_count: 1800,
        categories: &["Fine Dining", "Contemporary", "Tasting Menu"],
        price: PriceTier::Luxury,
        average_price: 335.0,
        description: "Three Michelin-starred restaurant offering an artful plant-based tasting menu in an art deco space.",
        image_url: "https://images.pexels.com/photos/941861/pexels-photo-941861.jpeg",
        neighborhood: "Flatiron District",
        cuisine_type: "Contemporary",
        latitude: 40.7416,
        longitude: -73.9872,
        ratings: (9.8, 9.7, 9.9),
    },
    Seed {
        id: "4",
        name: "Gramercy Tavern",
        address: "42 E 20th St, Flatiron District",
        rating: 9.3,
        review_count: 2150,
        categories: &["American", "Farm-to-Table", "Fine Dining"],
        price: PriceTier::Upscale,
        average_price: 95.0,
        description: "Sophisticated American restaurant with seasonal, farm-to-table cuisine in a warm, upscale setting.",
        image_url: "https://images.pexels.com/photos/5491004/pexels-photo-5491004.jpeg",
        neighborhood: "Flatiron District",
        cuisine_type: "American",
        latitude: 40.7387,
        longitude: -73.9885,
        ratings: (9.4, 9.5, 9.3),
    },
    Seed {
        id: "5",
        name: "Balthazar",
        address: "80 Spring St, SoHo",
        rating: 9.1,
        review_count: 2200,
        categories: &["French", "Brasserie", "Brunch"],
        price: PriceTier::Upscale,
        average_price: 70.0,
        description: "Bustling Parisian-style brasserie serving French classics in a grand, theatrical setting.",
        image_url: "https://images.pexels.com/photos/1579739/pexels-photo-1579739.jpeg",
        neighborhood: "SoHo",
        cuisine_type: "French",
        latitude: 40.7227,
        longitude: -73.9981,
        ratings: (9.2, 9.0, 9.4),
    },
    Seed {
        id: "6",
        name: "Russ & Daughters Cafe",
        address: "127 Orchard St, Lower East Side",
        rating: 9.0,
        review_count: 1700,
        categories: &["Jewish", "Breakfast", "Deli"],
        price: PriceTier::Moderate,
        average_price: 35.0,
        description: "Sit-down restaurant version of the iconic appetizing store, famous for bagels, lox, and Jewish comfort food.",
        image_url: "https://images.pexels.com/photos/1058277/pexels-photo-1058277.jpeg",
        neighborhood: "Lower East Side",
        cuisine_type: "Jewish",
        latitude: 40.7193,
        longitude: -73.9886,
        ratings: (9.3, 8.8, 8.9),
    },
];

const TRY_NEW: &[Seed] = &[
    Seed {
        id: "t1",
        name: "Wildair",
        address: "142 Orchard St, Lower East Side",
        rating: 9.2,
        review_count: 1250,
        categories: &["Natural Wine", "Small Plates", "Innovative"],
        price: PriceTier::Upscale,
        average_price: 65.0,
        description: "Casual, innovative restaurant with natural wines and creative small plates in an intimate setting.",
        image_url: "https://images.pexels.com/photos/541216/pexels-photo-541216.jpeg",
        neighborhood: "Lower East Side",
        cuisine_type: "Contemporary",
        latitude: 40.7200,
        longitude: -73.9879,
        ratings: (9.4, 8.9, 9.0),
    },
    Seed {
        id: "t2",
        name: "Kings Co Imperial",
        address: "20 Skillman Ave, Williamsburg",
        rating: 8.9,
        review_count: 1050,
        categories: &["Chinese", "Szechuan", "Dumpling"],
        price: PriceTier::Moderate,
        average_price: 40.0,
        description: "Modern Chinese restaurant serving authentic Szechuan cuisine with ingredients from their own garden.",
        image_url: "https://images.pexels.com/photos/2347311/pexels-photo-2347311.jpeg",
        neighborhood: "Williamsburg",
        cuisine_type: "Chinese",
        latitude: 40.7157,
        longitude: -73.9375,
        ratings: (9.2, 8.7, 8.8),
    },
    Seed {
        id: "t3",
        name: "Superiority Burger",
        address: "119 Avenue A, East Village",
        rating: 8.8,
        review_count: 980,
        categories: &["Vegetarian", "Burgers", "Small Plates"],
        price: PriceTier::Budget,
        average_price: 18.0,
        description: "Tiny vegetarian burger joint with creative sides by James Beard Award-winning chef Brooks Headley.",
        image_url: "https://images.pexels.com/photos/2983098/pexels-photo-2983098.jpeg",
        neighborhood: "East Village",
        cuisine_type: "Vegetarian",
        latitude: 40.7265,
        longitude: -73.9815,
        ratings: (9.0, 8.5, 8.2),
    },
    Seed {
        id: "t4",
        name: "St. Anselm",
        address: "355 Metropolitan Ave, Williamsburg",
        rating: 9.1,
        review_count: 1380,
        categories: &["Steakhouse", "Grilled", "Casual"],
        price: PriceTier::Moderate,
        average_price: 55.0,
        description: "Casual steakhouse with perfectly grilled meats and seafood at affordable prices in a rustic space.",
        image_url: "https://images.pexels.com/photos/410648/pexels-photo-410648.jpeg",
        neighborhood: "Williamsburg",
        cuisine_type: "Steakhouse",
        latitude: 40.7133,
        longitude: -73.9544,
        ratings: (9.3, 8.9, 8.7),
    },
    Seed {
        id: "t5",
        name: "Win Son",
        address: "159 Graham Ave, East Williamsburg",
        rating: 9.0,
        review_count: 1120,
        categories: &["Taiwanese", "Casual", "Innovative"],
        price: PriceTier::Moderate,
        average_price: 38.0,
        description: "Modern Taiwanese-American restaurant with creative dishes in a lively, casual setting.",
        image_url: "https://images.pexels.com/photos/1001773/pexels-photo-1001773.jpeg",
        neighborhood: "East Williamsburg",
        cuisine_type: "Taiwanese",
        latitude: 40.7096,
        longitude: -73.9452,
        ratings: (9.2, 8.8, 8.9),
    },
];

const DISCOVER: &[Seed] = &[
    Seed {
        id: "r1",
        name: "Cosme",
        address: "35 E 21st St, Flatiron District",
        rating: 9.3,
        review_count: 1760,
        categories: &["Mexican", "Contemporary", "Upscale"],
        price: PriceTier::Upscale,
        average_price: 95.0,
        description: "Modern Mexican restaurant by Chef Enrique Olvera featuring creative dishes and a contemporary atmosphere.",
        image_url: "https://images.pexels.com/photos/5718025/pexels-photo-5718025.jpeg",
        neighborhood: "Flatiron District",
        cuisine_type: "Mexican",
        latitude: 40.7400,
        longitude: -73.9897,
        ratings: (9.4, 9.2, 9.3),
    },
    Seed {
        id: "r2",
        name: "Atomix",
        address: "104 E 30th St, NoMad",
        rating: 9.7,
        review_count: 920,
        categories: &["Korean", "Fine Dining", "Tasting Menu"],
        price: PriceTier::Luxury,
        average_price: 270.0,
        description: "Innovative Korean fine dining restaurant offering a multi-course tasting menu with detailed card explanations.",
        image_url: "https://images.pexels.com/photos/2664216/pexels-photo-2664216.jpeg",
        neighborhood: "NoMad",
        cuisine_type: "Korean",
        latitude: 40.7445,
        longitude: -73.9834,
        ratings: (9.8, 9.6, 9.7),
    },
    Seed {
        id: "r3",
        name: "Adda",
        address: "31-31 Thomson Ave, Long Island City",
        rating: 9.1,
        review_count: 1080,
        categories: &["Indian", "Regional", "Spicy"],
        price: PriceTier::Moderate,
        average_price: 45.0,
        description: "Authentic Indian restaurant serving regional dishes in a casual, vibrant setting.",
        image_url: "https://images.pexels.com/photos/2474661/pexels-photo-2474661.jpeg",
        neighborhood: "Long Island City",
        cuisine_type: "Indian",
        latitude: 40.7445,
        longitude: -73.9339,
        ratings: (9.4, 8.9, 8.7),
    },
    Seed {
        id: "r4",
        name: "Di Fara Pizza",
        address: "1424 Avenue J, Midwood, Brooklyn",
        rating: 9.3,
        review_count: 1870,
        categories: &["Pizza", "Italian", "Legendary"],
        price: PriceTier::Moderate,
        average_price: 30.0,
        description: "Legendary Brooklyn pizzeria where Dom DeMarco has been making pizza by hand for over 50 years.",
        image_url: "https://images.pexels.com/photos/825661/pexels-photo-825661.jpeg",
        neighborhood: "Midwood",
        cuisine_type: "Pizza",
        latitude: 40.6252,
        longitude: -73.9618,
        ratings: (9.7, 8.3, 8.0),
    },
    Seed {
        id: "r5",
        name: "Atla",
        address: "372 Lafayette St, NoHo",
        rating: 8.9,
        review_count: 1320,
        categories: &["Mexican", "All Day", "Casual"],
        price: PriceTier::Moderate,
        average_price: 45.0,
        description: "Casual all-day Mexican restaurant with bright, modern decor and creative light fare.",
        image_url: "https://images.pexels.com/photos/2092507/pexels-photo-2092507.jpeg",
        neighborhood: "NoHo",
        cuisine_type: "Mexican",
        latitude: 40.7274,
        longitude: -73.9937,
        ratings: (9.1, 8.8, 9.0),
    },
    Seed {
        id: "r6",
        name: "Oxomoco",
        address: "128 Greenpoint Ave, Greenpoint",
        rating: 9.0,
        review_count: 1190,
        categories: &["Mexican", "Wood-Fired", "Casual Upscale"],
        price: PriceTier::Upscale,
        average_price: 60.0,
        description: "Michelin-starred Mexican restaurant with wood-fired cooking in a bright, plant-filled space.",
        image_url: "https://images.pexels.com/photos/2233729/pexels-photo-2233729.jpeg",
        neighborhood: "Greenpoint",
        cuisine_type: "Mexican",
        latitude: 40.7303,
        longitude: -73.9543,
        ratings: (9.2, 8.9, 9.1),
    },
];

const SEASONAL: &[Seed] = &[
    Seed {
        id: "s1",
        name: "Dante",
        address: "79-81 MacDougal St, Greenwich Village",
        rating: 9.1,
        review_count: 1430,
        categories: &["Cocktail Bar", "Italian", "Seasonal"],
        price: PriceTier::Moderate,
        average_price: 65.0,
        description: "Historic bar and restaurant with seasonal craft cocktails and Italian small plates. Perfect for summer evenings.",
        image_url: "https://images.pexels.com/photos/1484516/pexels-photo-1484516.jpeg",
        neighborhood: "Greenwich Village",
        cuisine_type: "Italian",
        latitude: 40.7295,
        longitude: -74.0025,
        ratings: (9.0, 9.3, 9.5),
    },
    Seed {
        id: "s2",
        name: "Westlight",
        address: "111 N 12th St, Williamsburg",
        rating: 9.2,
        review_count: 1200,
        categories: &["American", "Rooftop", "Cocktails"],
        price: PriceTier::Upscale,
        average_price: 80.0,
        description: "Rooftop bar and restaurant with panoramic views of Manhattan skyline. Ideal for warm weather dining.",
        image_url: "https://images.pexels.com/photos/2403391/pexels-photo-2403391.jpeg",
        neighborhood: "Williamsburg",
        cuisine_type: "American",
        latitude: 40.7222,
        longitude: -73.9574,
        ratings: (8.9, 9.0, 9.8),
    },
    Seed {
        id: "s3",
        name: "Grand Banks",
        address: "Pier 25, Hudson River Park",
        rating: 9.0,
        review_count: 1100,
        categories: &["Seafood", "Oyster Bar", "Seasonal"],
        price: PriceTier::Upscale,
        average_price: 75.0,
        description: "Seasonal oyster bar on a historic wooden schooner on the Hudson River. Open during warmer months.",
        image_url: "https://images.pexels.com/photos/2983101/pexels-photo-2983101.jpeg",
        neighborhood: "Tribeca",
        cuisine_type: "Seafood",
        latitude: 40.7207,
        longitude: -74.0142,
        ratings: (9.1, 8.8, 9.6),
    },
    Seed {
        id: "s4",
        name: "Frenchette",
        address: "241 W Broadway, Tribeca",
        rating: 9.3,
        review_count: 1250,
        categories: &["French", "Bistro", "Seasonal"],
        price: PriceTier::Upscale,
        average_price: 85.0,
        description: "Modern French bistro with a rotating seasonal menu featuring local ingredients.",
        image_url: "https://images.pexels.com/photos/696218/pexels-photo-696218.jpeg",
        neighborhood: "Tribeca",
        cuisine_type: "French",
        latitude: 40.7194,
        longitude: -74.0050,
        ratings: (9.4, 9.2, 9.1),
    },
    Seed {
        id: "s5",
        name: "Upland",
        address: "345 Park Ave S, Gramercy",
        rating: 9.1,
        review_count: 1320,
        categories: &["California", "Seasonal", "Wine Bar"],
        price: PriceTier::Upscale,
        average_price: 70.0,
        description: "California-inspired restaurant with seasonal ingredients and impressive wine list in a modern space.",
        image_url: "https://images.pexels.com/photos/683039/pexels-photo-683039.jpeg",
        neighborhood: "Gramercy",
        cuisine_type: "American",
        latitude: 40.7426,
        longitude: -73.9857,
        ratings: (9.2, 9.0, 9.3),
    },
];

const PERSONALIZED: &[Seed] = &[
    Seed {
        id: "p1",
        name: "Via Carota",
        address: "51 Grove St, West Village",
        rating: 9.4,
        review_count: 1543,
        categories: &["Italian", "Pasta", "Wine Bar"],
        price: PriceTier::Upscale,
        average_price: 65.0,
        description: "Beloved Italian restaurant known for pasta, vegetables, and rustic atmosphere. No reservations policy.",
        image_url: "https://images.pexels.com/photos/784633/pexels-photo-784633.jpeg",
        neighborhood: "West Village",
        cuisine_type: "Italian",
        latitude: 40.7334,
        longitude: -74.0027,
        ratings: (9.6, 9.2, 9.3),
    },
    Seed {
        id: "p2",
        name: "L'Artusi",
        address: "228 W 10th St, West Village",
        rating: 9.3,
        review_count: 1329,
        categories: &["Italian", "Wine Bar", "Pasta"],
        price: PriceTier::Upscale,
        average_price: 75.0,
        description: "Sophisticated Italian restaurant with a fantastic wine list, modern decor, and a lively atmosphere.",
        image_url: "https://images.pexels.com/photos/905847/pexels-photo-905847.jpeg",
        neighborhood: "West Village",
        cuisine_type: "Italian",
        latitude: 40.7342,
        longitude: -74.0048,
        ratings: (9.4, 9.2, 9.3),
    },
    Seed {
        id: "p3",
        name: "Minetta Tavern",
        address: "113 MacDougal St, Greenwich Village",
        rating: 9.2,
        review_count: 1815,
        categories: &["Steakhouse", "French", "American"],
        price: PriceTier::Upscale,
        average_price: 95.0,
        description: "Historic tavern known for exceptional steaks, particularly the Black Label Burger, in a vintage atmosphere.",
        image_url: "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg",
        neighborhood: "Greenwich Village",
        cuisine_type: "Steakhouse",
        latitude: 40.7302,
        longitude: -74.0005,
        ratings: (9.5, 9.1, 9.4),
    },
    Seed {
        id: "p4",
        name: "Joe's Pizza",
        address: "7 Carmine St, West Village",
        rating: 9.0,
        review_count: 2450,
        categories: &["Pizza", "Italian", "Quick Bite"],
        price: PriceTier::Budget,
        average_price: 12.0,
        description: "Iconic New York slice shop serving simple, classic pizza since 1975.",
        image_url: "https://images.pexels.com/photos/1566837/pexels-photo-1566837.jpeg",
        neighborhood: "West Village",
        cuisine_type: "Pizza",
        latitude: 40.7306,
        longitude: -74.0023,
        ratings: (9.3, 8.5, 8.2),
    },
    Seed {
        id: "p5",
        name: "Blue Hill",
        address: "75 Washington Pl, Greenwich Village",
        rating: 9.5,
        review_count: 1321,
        categories: &["American", "Farm-to-Table", "Fine Dining"],
        price: PriceTier::Luxury,
        average_price: 140.0,
        description: "Farm-to-table pioneer offering sophisticated seasonal cuisine sourced from nearby farms.",
        image_url: "https://images.pexels.com/photos/1484516/pexels-photo-1484516.jpeg",
        neighborhood: "Greenwich Village",
        cuisine_type: "American",
        latitude: 40.7312,
        longitude: -73.9997,
        ratings: (9.7, 9.5, 9.4),
    },
];
