/// Sets query arguments on a URI, replacing existing keys in place and
/// appending new ones. Untouched arguments and any fragment are kept as is.
pub fn add_query_args(uri: &str, args: &[(&str, &str)]) -> String {
    let (without_fragment, fragment) = match uri.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (uri, None),
    };
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };

    let mut pairs: Vec<(String, String)> = query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| match p.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (p.to_string(), String::new()),
        })
        .collect();

    for (key, value) in args {
        let encoded = urlencoding::encode(value).into_owned();
        match pairs.iter_mut().find(|(k, _)| decode_key(k) == *key) {
            Some(existing) => existing.1 = encoded,
            None => pairs.push((urlencoding::encode(key).into_owned(), encoded)),
        }
    }

    let mut out = path.to_string();
    if !pairs.is_empty() {
        out.push('?');
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        out.push_str(&joined);
    }
    if let Some(frag) = fragment {
        out.push('#');
        out.push_str(frag);
    }
    out
}

fn decode_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|k| k.into_owned())
        .unwrap_or(spaced)
}
