use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "qpsc_parallel")] {
        mod par;
        pub(crate) use par::generate_blocks;
    } else {
        mod soft;
        pub(crate) use soft::generate_blocks;
    }
}
