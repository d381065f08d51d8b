// HashMap<K, V, S>
mod hash;
