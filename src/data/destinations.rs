use std::sync::LazyLock;

use crate::models::destination::{
    Attraction, BudgetRange, BudgetTiers, Coordinates, Destination, Interest,
};

static CATALOG: LazyLock<Vec<Destination>> = LazyLock::new(build_catalog);

/// The curated destination list bundled with the binary.
pub fn catalog() -> &'static [Destination] {
    &CATALOG
}

fn tiers(low: (u32, u32), medium: (u32, u32), high: (u32, u32)) -> BudgetTiers {
    BudgetTiers {
        low: BudgetRange::usd(low.0, low.1),
        medium: BudgetRange::usd(medium.0, medium.1),
        high: BudgetRange::usd(high.0, high.1),
    }
}

fn attraction(name: &str, description: &str, image_url: &str) -> Attraction {
    Attraction {
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

struct Links<'a> {
    flight: &'a str,
    hotel: &'a str,
    tour: &'a str,
}

#[allow(clippy::too_many_arguments)]
fn destination(
    id: &str,
    name: &str,
    country: &str,
    coordinates: (f64, f64),
    description: &str,
    image_url: &str,
    best_time_to_visit: &str,
    budget: BudgetTiers,
    interests: &[Interest],
    top_attractions: Vec<Attraction>,
    links: Links<'_>,
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        best_time_to_visit: best_time_to_visit.to_string(),
        budget,
        interests: interests.to_vec(),
        top_attractions,
        flight_link: Some(links.flight.to_string()),
        hotel_link: Some(links.hotel.to_string()),
        tour_link: Some(links.tour.to_string()),
        coordinates: Coordinates::new(coordinates.0, coordinates.1),
    }
}

fn build_catalog() -> Vec<Destination> {
    use Interest::*;

    vec![
        destination(
            "bali-indonesia",
            "Bali",
            "Indonesia",
            (-8.4095, 115.1889),
            "Bali is a paradise for beach lovers and cultural explorers. With its lush landscapes, ancient temples, and vibrant arts scene, it offers a perfect blend of relaxation and adventure.",
            "https://images.unsplash.com/photo-1537996194471-e657df975ab4",
            "March - October",
            tiers((500, 900), (900, 1800), (1800, 3500)),
            &[Beaches, Culture, Nature, Relaxation],
            vec![
                attraction(
                    "Uluwatu Temple",
                    "A Balinese Hindu sea temple perched on a cliff",
                    "https://images.unsplash.com/photo-1555400038-63f5ba517a47",
                ),
                attraction(
                    "Ubud Monkey Forest",
                    "A nature reserve and temple complex with many monkeys",
                    "https://images.unsplash.com/photo-1560997027-42da74fbf4c8",
                ),
                attraction(
                    "Tegallalang Rice Terraces",
                    "Stunning rice terraces offering beautiful views",
                    "https://images.unsplash.com/photo-1531592937781-344ad608fabf",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/dps/",
                hotel: "https://www.booking.com/region/id/bali.html",
                tour: "https://www.getyourguide.com/bali-l347/",
            },
        ),
        destination(
            "kyoto-japan",
            "Kyoto",
            "Japan",
            (35.0116, 135.7681),
            "The cultural heart of Japan, Kyoto is home to over 1,600 Buddhist temples, hundreds of Shinto shrines, and exquisite gardens. Experience traditional tea ceremonies and witness the beauty of cherry blossoms in spring.",
            "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e",
            "March - May and October - November",
            tiers((700, 1200), (1200, 2100), (2100, 4000)),
            &[Culture, Food, Nature],
            vec![
                attraction(
                    "Fushimi Inari Shrine",
                    "Famous for its thousands of vermilion torii gates",
                    "https://images.unsplash.com/photo-1478436127897-769e1b3f0f36",
                ),
                attraction(
                    "Arashiyama Bamboo Grove",
                    "A stunning bamboo forest that offers a peaceful walk",
                    "https://images.unsplash.com/photo-1503899036084-c55cdd92da26",
                ),
                attraction(
                    "Kinkaku-ji (Golden Pavilion)",
                    "A Zen temple whose top two floors are completely covered in gold leaf",
                    "https://images.unsplash.com/photo-1587639739012-5ccf33be561d",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/osa/",
                hotel: "https://www.booking.com/city/jp/kyoto.html",
                tour: "https://www.getyourguide.com/kyoto-l96632/",
            },
        ),
        destination(
            "barcelona-spain",
            "Barcelona",
            "Spain",
            (41.3851, 2.1734),
            "Barcelona is a vibrant city known for its iconic architecture, amazing food, and beautiful beaches. From Gaudí's masterpieces to the Gothic Quarter, there's something for everyone.",
            "https://images.unsplash.com/photo-1539037116277-4db20889f2d4",
            "May - June and September - October",
            tiers((600, 1000), (1000, 1800), (1800, 3500)),
            &[Culture, Food, Beaches, Relaxation],
            vec![
                attraction(
                    "Sagrada Familia",
                    "Antoni Gaudí's iconic unfinished church, a UNESCO World Heritage site",
                    "https://images.unsplash.com/photo-1583779457094-ab5319950fe7",
                ),
                attraction(
                    "Park Güell",
                    "A public park system with gardens and architectural elements designed by Gaudí",
                    "https://images.unsplash.com/photo-1576654663784-672c774a458b",
                ),
                attraction(
                    "La Rambla",
                    "A famous street in central Barcelona popular with tourists and locals",
                    "https://images.unsplash.com/photo-1544708795-a5550ace546e",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/bcn/",
                hotel: "https://www.booking.com/city/es/barcelona.html",
                tour: "https://www.getyourguide.com/barcelona-l45/",
            },
        ),
        destination(
            "bangkok-thailand",
            "Bangkok",
            "Thailand",
            (13.736717, 100.523186),
            "Bangkok, Thailand's vibrant capital, offers a fascinating mix of tradition and modernity. Experience magnificent temples, floating markets, and a street food scene that's second to none.",
            "https://images.unsplash.com/photo-1508009603885-50cf7c8dd0d5",
            "November - February",
            tiers((400, 800), (800, 1500), (1500, 3000)),
            &[Culture, Food, Adventure],
            vec![
                attraction(
                    "Grand Palace",
                    "A complex of buildings that served as the official residence of the Kings of Thailand",
                    "https://images.unsplash.com/photo-1563492065599-3520f775eeed",
                ),
                attraction(
                    "Wat Arun",
                    "A Buddhist temple on the west bank of the Chao Phraya River",
                    "https://images.unsplash.com/photo-1570168007204-dfb528c6958f",
                ),
                attraction(
                    "Chatuchak Weekend Market",
                    "One of the world's largest weekend markets with over 15,000 stalls",
                    "https://images.unsplash.com/photo-1569660072562-48a035e65c30",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/bkk/",
                hotel: "https://www.booking.com/city/th/bangkok.html",
                tour: "https://www.getyourguide.com/bangkok-l169/",
            },
        ),
        destination(
            "reykjavik-iceland",
            "Reykjavik",
            "Iceland",
            (64.1466, -21.9426),
            "Reykjavik is the perfect base for exploring Iceland's otherworldly landscapes. From the Northern Lights to geothermal spas, experience nature at its most dramatic.",
            "https://images.unsplash.com/photo-1504893524553-b855bce32c67",
            "June - August (Summer), September - March (Northern Lights)",
            tiers((900, 1600), (1600, 2800), (2800, 5000)),
            &[Nature, Adventure],
            vec![
                attraction(
                    "Blue Lagoon",
                    "A geothermal spa that is one of the most visited attractions in Iceland",
                    "https://images.unsplash.com/photo-1598536527213-7e539a3a7666",
                ),
                attraction(
                    "Golden Circle",
                    "A popular tourist route that includes geysers, waterfalls, and national parks",
                    "https://images.unsplash.com/photo-1537519646099-335112f03225",
                ),
                attraction(
                    "Northern Lights",
                    "A natural light display visible in the Arctic regions during winter months",
                    "https://images.unsplash.com/photo-1531366936337-7c912a4589a7",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/kef/",
                hotel: "https://www.booking.com/city/is/reykjavik.html",
                tour: "https://www.getyourguide.com/reykjavik-l30/",
            },
        ),
        destination(
            "marrakech-morocco",
            "Marrakech",
            "Morocco",
            (31.6295, -7.9811),
            "Marrakech is a magical place known for its bustling souks, beautiful riads, and the famous Djemaa el-Fna square. The \"Red City\" offers a sensory overload of colors, smells, and tastes.",
            "https://images.unsplash.com/photo-1597212618440-806262de4f9b",
            "March - May and September - November",
            tiers((500, 900), (900, 1600), (1600, 3000)),
            &[Culture, Food, Adventure, Relaxation],
            vec![
                attraction(
                    "Jardin Majorelle",
                    "A botanical garden designed by the French painter Jacques Majorelle",
                    "https://images.unsplash.com/photo-1535332371349-a5d229f49cb5",
                ),
                attraction(
                    "Bahia Palace",
                    "A palace built in the late 19th century intended to be the greatest palace of its time",
                    "https://images.unsplash.com/photo-1612211657307-95e9dd5e7014",
                ),
                attraction(
                    "Medina of Marrakech",
                    "The old walled city with narrow alleyways filled with shops, food vendors, and artisans",
                    "https://images.unsplash.com/photo-1585670347971-b429d59e1ab3",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/rak/",
                hotel: "https://www.booking.com/city/ma/marrakech.html",
                tour: "https://www.getyourguide.com/marrakech-l208/",
            },
        ),
        destination(
            "new-york-usa",
            "New York City",
            "USA",
            (40.7128, -74.0060),
            "The \"Big Apple\" offers something for everyone - world-class museums, iconic landmarks, Broadway shows, and an endless array of dining options. Experience the energy of this iconic metropolis.",
            "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9",
            "April - June and September - November",
            tiers((1000, 1800), (1800, 3000), (3000, 6000)),
            &[Culture, Food, Adventure],
            vec![
                attraction(
                    "Central Park",
                    "An urban park in Manhattan that spans 843 acres",
                    "https://images.unsplash.com/photo-1534969783039-f10d31d4bd5c",
                ),
                attraction(
                    "Statue of Liberty",
                    "A colossal neoclassical sculpture on Liberty Island in New York Harbor",
                    "https://images.unsplash.com/photo-1546436836-07a91091f160",
                ),
                attraction(
                    "Metropolitan Museum of Art",
                    "One of the world's largest and finest art museums",
                    "https://images.unsplash.com/photo-1565794462320-94de25c23b6c",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/nyca/",
                hotel: "https://www.booking.com/city/us/new-york.html",
                tour: "https://www.getyourguide.com/new-york-l59/",
            },
        ),
        destination(
            "cape-town-south-africa",
            "Cape Town",
            "South Africa",
            (-33.9249, 18.4241),
            "Cape Town is a stunning coastal city nestled between the iconic Table Mountain and the Atlantic Ocean. With its diverse landscapes, rich history, and vibrant culture, it offers a unique African adventure.",
            "https://images.unsplash.com/photo-1580060839134-75a5edca2e99",
            "February - April and September - November",
            tiers((600, 1100), (1100, 2000), (2000, 4000)),
            &[Nature, Adventure, Culture, Beaches],
            vec![
                attraction(
                    "Table Mountain",
                    "A flat-topped mountain forming a prominent landmark overlooking the city",
                    "https://images.unsplash.com/photo-1563302905-4c12cf21be8f",
                ),
                attraction(
                    "Robben Island",
                    "Where Nelson Mandela was imprisoned for 18 of his 27 years behind bars",
                    "https://images.unsplash.com/photo-1591294372276-2bed46cc6d2f",
                ),
                attraction(
                    "Cape of Good Hope",
                    "A rocky headland on the Atlantic coast of South Africa",
                    "https://images.unsplash.com/photo-1576020799627-aeac74d58d9d",
                ),
            ],
            Links {
                flight: "https://www.skyscanner.com/transport/flights/to/cpt/",
                hotel: "https://www.booking.com/city/za/cape-town.html",
                tour: "https://www.getyourguide.com/cape-town-l103/",
            },
        ),
    ]
}
