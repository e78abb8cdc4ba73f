use url::form_urlencoded;

/// Serialize `fields` as an `application/x-www-form-urlencoded` string.
///
/// Pairs keep their input order. With `skip_absent`, fields whose value is
/// `None` are dropped; otherwise they are written as `key=`.
pub fn serialize_form<'a, I>(fields: I, skip_absent: bool) -> String
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        match value {
            Some(value) => {
                serializer.append_pair(key, &value);
            }
            None if skip_absent => {}
            None => {
                serializer.append_pair(key, "");
            }
        }
    }
    serializer.finish()
}
