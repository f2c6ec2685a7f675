use std::{env, process::ExitCode};

use log::{debug, warn};
use mapbox::{DirectionsClient, MapboxConfig};
use model::{washroom::Washroom, WithId, WithProximity};
use utility::geo::Coordinate;
use washrooms_api::{washrooms::DEFAULT_RADIUS_KM, ApiConfig, WashroomApiClient};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let Some(query) = parse_args() else {
        eprintln!("usage: nearby <latitude> <longitude> [radius-km]");
        return ExitCode::FAILURE;
    };

    let client = WashroomApiClient::new(ApiConfig::env());
    debug!("backend at {}", client.base_url());
    let ranked = match client
        .nearby_washrooms(query.origin, query.radius_km)
        .await
    {
        Ok(ranked) => ranked,
        Err(why) => {
            eprintln!("could not fetch washrooms: {why}");
            return ExitCode::FAILURE;
        }
    };

    if ranked.is_empty() {
        // An empty box is a normal outcome, not an error.
        println!("No washrooms within {} km.", query.radius_km);
        return ExitCode::SUCCESS;
    }

    print!("{}", format_table(&ranked));

    // With a Mapbox token configured, replace the coarse estimates for
    // the closest hit with real routed durations.
    if let Some(config) = MapboxConfig::from_env() {
        refine_closest(&DirectionsClient::new(config), query.origin, &ranked[0]).await;
    }

    ExitCode::SUCCESS
}

struct Query {
    origin: Coordinate,
    radius_km: f64,
}

fn parse_args() -> Option<Query> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 3 {
        return None;
    }

    let latitude = args[0].parse::<f64>().ok()?;
    let longitude = args[1].parse::<f64>().ok()?;
    let radius_km = match args.get(2) {
        Some(raw) => raw.parse::<f64>().ok()?,
        None => DEFAULT_RADIUS_KM,
    };
    if radius_km < 0.0 {
        return None;
    }

    Some(Query {
        origin: Coordinate::new(latitude, longitude),
        radius_km,
    })
}

fn format_table(ranked: &[WithProximity<WithId<Washroom>>]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<28} {:>9} {:>8} {:>8} {:>7}\n",
        "name", "distance", "walk", "drive", "rating"
    ));
    for entry in ranked {
        let washroom = &entry.content.content;
        out.push_str(&format!(
            "{:<28} {:>7.2}km {:>8} {:>8} {:>7}\n",
            truncate(&washroom.name, 28),
            entry.distance_km,
            entry.walking_estimate,
            entry.driving_estimate,
            format_rating(washroom),
        ));
    }
    out
}

fn format_rating(washroom: &Washroom) -> String {
    if washroom.rating_count == 0 {
        "-".to_owned()
    } else {
        format!("{:.1}", washroom.overall_rating)
    }
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_owned();
    }
    let mut out = name.chars().take(max - 1).collect::<String>();
    out.push('.');
    out
}

async fn refine_closest(
    directions: &DirectionsClient,
    origin: Coordinate,
    closest: &WithProximity<WithId<Washroom>>,
) {
    let washroom = &closest.content.content;
    let destination = Coordinate::new(washroom.latitude, washroom.longitude);
    match directions.walking_and_driving(origin, destination).await {
        Ok((walk, drive)) => {
            println!(
                "\nRouted to {}: {:.2} km, walk {}, drive {}",
                washroom.name,
                walk.distance_km(),
                walk.duration_text(),
                drive.duration_text(),
            );
        }
        Err(why) => {
            // The coarse estimates above remain valid without a route.
            warn!("could not fetch routes: {why}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utility::id::Id;

    fn listing(name: &str, rating_count: u32, overall_rating: f64) -> Washroom {
        Washroom {
            name: name.to_owned(),
            description: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            latitude: 49.28,
            longitude: -123.12,
            geom: None,
            opening_hours: None,
            wheelchair_access: false,
            overall_rating,
            rating_count,
            created_by: None,
        }
    }

    #[test]
    fn unrated_listings_show_a_dash() {
        assert_eq!(format_rating(&listing("x", 0, 0.0)), "-");
        assert_eq!(format_rating(&listing("x", 3, 4.25)), "4.2");
    }

    #[test]
    fn table_rows_carry_the_estimates() {
        let ranked = vec![WithProximity::new(
            1.5,
            WithId::new(Id::new("w-1".to_owned()), listing("Waterfront", 2, 4.0)),
        )];
        let table = format_table(&ranked);
        assert!(table.contains("Waterfront"));
        assert!(table.contains("18 min")); // 1.5 km walked at 5 km/h
        assert!(table.contains("3 min")); // 1.5 km driven at 30 km/h
    }

    #[test]
    fn long_names_are_truncated_for_the_table() {
        let name = "A very very very long washroom listing name";
        let shown = truncate(name, 28);
        assert_eq!(shown.chars().count(), 28);
        assert!(shown.ends_with('.'));
    }
}
