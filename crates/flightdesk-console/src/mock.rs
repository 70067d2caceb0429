//! Built-in demo data.
//!
//! The console has no persistence; every run starts from this data set.

use crate::catalog::Catalog;
use crate::entities::{
    Airspace, Badge, BadgeCategory, Drone, DroneStatus, Order, OrderStatus, PackageTier, Pilot,
    PilotLevel, ReviewAddress, ReviewPackage, Role, SiteSurvey, User, Weather, Zone,
};
use crate::store::MemoryStore;

/// Builds a catalog holding the demo data.
pub fn catalog() -> Catalog {
    Catalog {
        users: MemoryStore::new(users()),
        drones: MemoryStore::new(drones()),
        pilots: MemoryStore::new(pilots()),
        orders: MemoryStore::new(orders()),
        surveys: MemoryStore::new(surveys()),
        packages: MemoryStore::new(packages()),
        addresses: MemoryStore::new(addresses()),
        badges: MemoryStore::new(badges()),
    }
}

fn user(id: &str, name: &str, role: Role, city: &str, joined: &str, active: bool) -> User {
    let email = format!(
        "{}@flightdesk.test",
        name.to_lowercase().replace(' ', ".")
    );
    User {
        id: id.to_string(),
        name: name.to_string(),
        email,
        role,
        city: city.to_string(),
        joined: joined.to_string(),
        active,
    }
}

fn users() -> Vec<User> {
    use Role::*;
    vec![
        user("u-001", "Ana Martins", Admin, "Lisbon", "2023-01-09", true),
        user("u-002", "Bruno Costa", Customer, "Porto", "2023-02-14", true),
        user("u-003", "Chloe Durand", Operator, "Lyon", "2023-03-02", true),
        user("u-004", "Diego Alvarez", Pilot, "Seville", "2023-03-20", true),
        user("u-005", "Emma Schulz", Pilot, "Munich", "2023-04-11", true),
        user("u-006", "Farid Haddad", Pilot, "Marseille", "2023-05-05", true),
        user("u-007", "Greta Lind", Pilot, "Gothenburg", "2023-06-18", false),
        user("u-008", "Hugo Moreau", Pilot, "Lyon", "2023-07-01", true),
        user("u-009", "Ines Rocha", Pilot, "Lisbon", "2023-08-23", true),
        user("u-010", "Jonas Berg", Pilot, "Oslo", "2023-09-30", true),
        user("u-011", "Kaito Mori", Pilot, "Porto", "2023-10-12", true),
        user("u-012", "Lea Novak", Customer, "Ljubljana", "2024-01-15", true),
        user("u-013", "Marco Bianchi", Customer, "Turin", "2024-02-27", false),
        user("u-014", "Nadia Petrova", Customer, "Lyon", "2024-04-03", true),
    ]
}

fn drone(
    id: &str,
    nickname: &str,
    model: &str,
    status: DroneStatus,
    owner: Option<&str>,
    flight_hours: f64,
    available: bool,
) -> Drone {
    Drone {
        id: id.to_string(),
        nickname: nickname.to_string(),
        model: model.to_string(),
        serial: format!("FD-{}", id.trim_start_matches("d-")),
        status,
        owner_pilot_id: owner.map(str::to_string),
        flight_hours,
        available,
    }
}

fn drones() -> Vec<Drone> {
    use DroneStatus::*;
    vec![
        drone("d-01", "Red Dragon", "Mavic 3 Pro", Active, Some("p-01"), 212.5, true),
        drone("d-02", "Blue Heron", "Mavic 3 Classic", Active, Some("p-02"), 148.0, true),
        drone("d-03", "Night Owl", "Matrice 30T", Active, Some("p-03"), 96.25, false),
        drone("d-04", "Kestrel", "Air 3", Maintenance, Some("p-01"), 301.0, false),
        drone("d-05", "Paper Kite", "Mini 4 Pro", Active, None, 12.0, true),
        drone("d-06", "Storm Petrel", "Matrice 350", Active, Some("p-05"), 410.75, true),
        drone("d-07", "Little Wren", "Mini 3", Retired, None, 520.0, false),
        drone("d-08", "Green Dragon", "Mavic 3 Pro", Active, Some("p-06"), 64.5, true),
        drone("d-09", "Swift", "Avata 2", Active, Some("p-04"), 33.0, true),
        drone("d-10", "Albatross", "Matrice 350", Maintenance, None, 188.0, false),
        drone("d-11", "Magpie", "Air 3", Active, Some("p-07"), 72.0, true),
        drone("d-12", "Osprey", "Mavic 3 Enterprise", Active, Some("p-08"), 255.5, true),
        drone("d-13", "Dragonfly", "Mini 4 Pro", Active, Some("p-02"), 5.5, true),
        drone("d-14", "Old Crow", "Phantom 4", Retired, None, 880.0, false),
    ]
}

fn pilot(
    id: &str,
    user_id: &str,
    name: &str,
    region: &str,
    level: PilotLevel,
    rating: f64,
    verified: bool,
) -> Pilot {
    Pilot {
        id: id.to_string(),
        user_id: user_id.to_string(),
        name: name.to_string(),
        license: format!("EU-UAS-{}", id.trim_start_matches("p-").repeat(3)),
        region: region.to_string(),
        level,
        rating,
        verified,
    }
}

fn pilots() -> Vec<Pilot> {
    use PilotLevel::*;
    vec![
        pilot("p-01", "u-004", "Diego Alvarez", "Andalusia", Senior, 4.8, true),
        pilot("p-02", "u-005", "Emma Schulz", "Bavaria", Certified, 4.5, true),
        pilot("p-03", "u-006", "Farid Haddad", "Provence", Certified, 4.1, true),
        pilot("p-04", "u-007", "Greta Lind", "West Sweden", Trainee, 3.9, false),
        pilot("p-05", "u-008", "Hugo Moreau", "Rhone Valley", Senior, 4.9, true),
        pilot("p-06", "u-009", "Ines Rocha", "Lisbon Coast", Certified, 4.4, true),
        pilot("p-07", "u-010", "Jonas Berg", "Eastern Norway", Trainee, 4.0, false),
        pilot("p-08", "u-011", "Kaito Mori", "Northern Portugal", Certified, 4.6, true),
    ]
}

fn packages() -> Vec<ReviewPackage> {
    let package = |id: &str, name: &str, description: &str, tier, minutes, price, published| {
        ReviewPackage {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tier,
            duration_minutes: minutes,
            price,
            published,
        }
    };
    use PackageTier::*;
    vec![
        package("pk-basic", "Quick Look", "Single-battery roof and facade check", Basic, 30, 9_900, true),
        package("pk-photo", "Photo Survey", "Stills of every elevation, edited", Standard, 60, 19_900, true),
        package("pk-video", "Video Tour", "4K orbit and fly-through footage", Standard, 90, 24_900, true),
        package("pk-thermal", "Thermal Scan", "Infrared scan for heat loss and leaks", Premium, 120, 44_900, true),
        package("pk-mapping", "Site Mapping", "Orthomosaic map and 3D model", Premium, 180, 64_900, false),
        package("pk-night", "Night Inspection", "Low-light inspection with spotlight", Premium, 90, 39_900, false),
    ]
}

fn addresses() -> Vec<ReviewAddress> {
    let address = |id: &str, label: &str, street: &str, city: &str, postcode: &str, zone, enabled| {
        ReviewAddress {
            id: id.to_string(),
            label: label.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            postcode: postcode.to_string(),
            zone,
            enabled,
        }
    };
    use Zone::*;
    vec![
        address("a-01", "Harbour Warehouse", "12 Rua do Cais", "Porto", "4050-001", Urban, true),
        address("a-02", "Vineyard Estate", "Quinta da Serra", "Peso da Regua", "5050-100", Rural, true),
        address("a-03", "Riverside Offices", "8 Quai Saint-Antoine", "Lyon", "69002", Urban, true),
        address("a-04", "Hillside Villa", "3 Chemin des Pins", "Aix-en-Provence", "13100", Suburban, true),
        address("a-05", "Solar Farm", "Km 14 Carretera A-92", "Seville", "41500", Rural, true),
        address("a-06", "Old Mill", "22 Mühlenweg", "Freising", "85354", Rural, false),
        address("a-07", "Tech Campus", "1 Avenida da Inovacao", "Lisbon", "1990-100", Suburban, true),
        address("a-08", "Cathedral Square", "Piazza Castello", "Turin", "10122", Urban, false),
        address("a-09", "Lakeside Cabin", "Sjovegen 5", "Lillehammer", "2609", Rural, true),
    ]
}

fn orders() -> Vec<Order> {
    use OrderStatus::*;
    // (customer, pilot, package, address, status, date, amount, paid)
    let rows: [(&str, Option<&str>, &str, &str, OrderStatus, &str, u64, bool); 23] = [
        ("u-002", Some("p-08"), "pk-basic", "a-01", Completed, "2024-05-03", 9_900, true),
        ("u-012", Some("p-02"), "pk-photo", "a-06", Completed, "2024-05-11", 19_900, true),
        ("u-014", Some("p-05"), "pk-thermal", "a-03", Completed, "2024-05-20", 44_900, true),
        ("u-002", Some("p-08"), "pk-video", "a-02", Completed, "2024-06-02", 24_900, true),
        ("u-013", None, "pk-basic", "a-08", Cancelled, "2024-06-09", 9_900, false),
        ("u-014", Some("p-03"), "pk-photo", "a-04", Completed, "2024-06-15", 19_900, true),
        ("u-012", Some("p-01"), "pk-mapping", "a-05", Completed, "2024-06-28", 64_900, true),
        ("u-002", Some("p-06"), "pk-thermal", "a-07", Completed, "2024-07-04", 44_900, false),
        ("u-014", Some("p-05"), "pk-video", "a-03", Scheduled, "2024-07-19", 24_900, true),
        ("u-012", Some("p-01"), "pk-basic", "a-05", Completed, "2024-07-27", 9_900, true),
        ("u-013", Some("p-06"), "pk-photo", "a-07", Cancelled, "2024-08-03", 19_900, false),
        ("u-002", Some("p-08"), "pk-night", "a-01", Scheduled, "2024-08-16", 39_900, false),
        ("u-014", Some("p-03"), "pk-thermal", "a-04", Scheduled, "2024-08-24", 44_900, true),
        ("u-012", Some("p-02"), "pk-video", "a-06", Pending, "2024-09-01", 24_900, false),
        ("u-002", None, "pk-basic", "a-02", Pending, "2024-09-07", 9_900, false),
        ("u-014", Some("p-01"), "pk-mapping", "a-05", Scheduled, "2024-09-14", 64_900, false),
        ("u-013", None, "pk-photo", "a-08", Pending, "2024-09-21", 19_900, false),
        ("u-012", Some("p-07"), "pk-basic", "a-09", Scheduled, "2024-09-28", 9_900, true),
        ("u-002", Some("p-06"), "pk-video", "a-07", Pending, "2024-10-05", 24_900, false),
        ("u-014", None, "pk-thermal", "a-03", Pending, "2024-10-12", 44_900, false),
        ("u-012", Some("p-01"), "pk-photo", "a-05", Pending, "2024-10-19", 19_900, false),
        ("u-002", Some("p-04"), "pk-basic", "a-01", Cancelled, "2024-10-26", 9_900, false),
        ("u-014", Some("p-05"), "pk-night", "a-03", Pending, "2024-11-02", 39_900, false),
    ];

    let names = users();
    rows.into_iter()
        .enumerate()
        .map(|(n, (customer, pilot, package, address, status, date, amount, paid))| {
            let customer_name = names
                .iter()
                .find(|u| u.id == customer)
                .map(|u| u.name.clone())
                .unwrap_or_default();
            Order {
                id: format!("o-{}", 1001 + n),
                customer_id: customer.to_string(),
                customer_name,
                pilot_id: pilot.map(str::to_string),
                package_id: package.to_string(),
                address_id: address.to_string(),
                status,
                scheduled_for: date.to_string(),
                amount,
                paid,
            }
        })
        .collect()
}

fn surveys() -> Vec<SiteSurvey> {
    let survey = |id: &str, order: &str, pilot: &str, site: &str, airspace, weather, notes: &str, completed| {
        SiteSurvey {
            id: id.to_string(),
            order_id: order.to_string(),
            pilot_id: pilot.to_string(),
            site: site.to_string(),
            airspace,
            weather,
            notes: notes.to_string(),
            completed,
        }
    };
    use Airspace::*;
    use Weather::*;
    vec![
        survey("s-01", "o-1001", "p-08", "Harbour Warehouse", Controlled, Windy, "Crane on the quay, keep 30m clear", true),
        survey("s-02", "o-1003", "p-05", "Riverside Offices", Controlled, Clear, "Tram lines along the south side", true),
        survey("s-03", "o-1007", "p-01", "Solar Farm", Open, Clear, "Panels reflect at noon, fly early", true),
        survey("s-04", "o-1009", "p-05", "Riverside Offices", Controlled, Rain, "Rescheduled once for rain", false),
        survey("s-05", "o-1010", "p-01", "Solar Farm", Open, Windy, "", true),
        survey("s-06", "o-1012", "p-08", "Harbour Warehouse", Controlled, Clear, "Night permit requested", false),
        survey("s-07", "o-1013", "p-03", "Hillside Villa", Open, Clear, "Pine trees on the east boundary", false),
        survey("s-08", "o-1016", "p-01", "Solar Farm", Open, Clear, "Mapping grid at 60m", false),
        survey("s-09", "o-1018", "p-07", "Lakeside Cabin", Open, Windy, "Gusts off the lake in the afternoon", false),
        survey("s-10", "o-1008", "p-06", "Tech Campus", Restricted, Clear, "Helipad nearby, coordinate with tower", true),
    ]
}

fn badges() -> Vec<Badge> {
    let badge = |id: &str, name: &str, description: &str, category, hours, enabled| Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        required_hours: hours,
        enabled,
    };
    use BadgeCategory::*;
    vec![
        badge("b-01", "First Flight", "Completed a first paid review", Milestone, 1, true),
        badge("b-02", "Safety First", "Fifty flights with no incident", Safety, 50, true),
        badge("b-03", "Thermal Expert", "Twenty thermal scans delivered", Skill, 40, true),
        badge("b-04", "Night Owl", "Certified for night operations", Skill, 80, true),
        badge("b-05", "Centurion", "One hundred flight hours", Milestone, 100, true),
        badge("b-06", "Storm Rider", "Flights in gusts above 30 km/h", Safety, 150, false),
    ]
}
