// String
mod string;

// Vec<T>, VecDeque<T>
mod vec;
mod vec_deque;

// BTreeMap<K, V>
mod btree_map;

// Box<T>, Box<dyn Reflect>, Arc<T>
mod boxed;
mod sync;
