use crate::models::order::GeoPoint;
use crate::models::reference::{NearestPlace, Place};

const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * haversine.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

pub fn nearest_place(from: &GeoPoint, places: &[Place]) -> Option<NearestPlace> {
    places
        .iter()
        .map(|place| (place, haversine_km(from, &place.location)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(place, distance_km)| NearestPlace {
            place: place.clone(),
            distance_km,
        })
}

#[cfg(test)]
mod tests {
    use super::{haversine_km, nearest_place};
    use crate::models::order::GeoPoint;
    use crate::models::reference::Place;

    fn place(name: &str, lat: f64, lng: f64) -> Place {
        Place {
            name: name.to_string(),
            location: GeoPoint { lat, lng },
        }
    }

    #[test]
    fn zero_distance_for_same_point() {
        let p = GeoPoint {
            lat: 13.0382,
            lng: 80.2466,
        };
        let distance = haversine_km(&p, &p);
        assert!(distance < 1e-9);
    }

    #[test]
    fn chennai_to_bengaluru_is_around_290_km() {
        let chennai = GeoPoint {
            lat: 13.0827,
            lng: 80.2707,
        };
        let bengaluru = GeoPoint {
            lat: 12.9716,
            lng: 77.5946,
        };
        let distance = haversine_km(&chennai, &bengaluru);
        assert!((distance - 290.0).abs() < 10.0);
    }

    #[test]
    fn nearest_place_picks_smallest_distance() {
        let places = vec![
            place("far", 13.2, 80.4),
            place("near", 13.039, 80.247),
            place("middle", 13.06, 80.26),
        ];
        let from = GeoPoint {
            lat: 13.0382,
            lng: 80.2466,
        };

        let nearest = nearest_place(&from, &places).unwrap();
        assert_eq!(nearest.place.name, "near");
        assert!(nearest.distance_km < 1.0);
    }

    #[test]
    fn nearest_place_of_empty_list_is_none() {
        let from = GeoPoint { lat: 0.0, lng: 0.0 };
        assert!(nearest_place(&from, &[]).is_none());
    }
}
