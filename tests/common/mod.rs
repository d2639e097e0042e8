#![allow(dead_code)]

use discogrify::types::Profile;
use serde_json::{Value, json};

pub fn profile_json() -> Value {
    json!({
        "id": "wizzler",
        "display_name": "JM Wizzler",
        "email": "email@example.com",
        "uri": "spotify:user:wizzler",
        "href": "https://api.spotify.com/v1/users/wizzler",
        "images": [
            { "url": "https://i.scdn.co/image/ab6775700000ee85", "height": 300, "width": 300 }
        ],
        "external_urls": { "spotify": "https://open.spotify.com/user/wizzler" },
        "country": "SE",
        "product": "premium",
        "followers": { "href": null, "total": 3829 }
    })
}

pub fn profile() -> Profile {
    serde_json::from_value(profile_json()).unwrap()
}

pub fn profile_without_image() -> Profile {
    let mut json = profile_json();
    json["images"] = json!([]);
    serde_json::from_value(json).unwrap()
}
