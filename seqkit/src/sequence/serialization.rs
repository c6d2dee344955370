use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::core::Sequence;

// A sequence serializes as a plain list; the variant is an implementation
// detail and is recovered from the length on the way back in.
impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Sequence::new)
    }
}
