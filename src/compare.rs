//! Content equivalence for two observations of the same container.
//!
//! The runtime does not enumerate `ports` and `mounts` in a stable order
//! between successive listings of an unchanged container, so those two
//! collections are sort-normalised before comparison. Every other field
//! is compared exactly as returned — in particular `names`, where order
//! reflects a real rename and must count as a change. The policy is
//! per-field and explicit; a blanket order-insensitive deep comparison
//! would mask genuine changes.

use bollard::models::{ContainerSummary, MountPoint, Port};

/// Decides whether two records of an already-matched container are
/// semantically identical.
///
/// Callers are expected to have matched the records by id first; the
/// comparator only answers the content question.
#[derive(Debug, Clone, Copy)]
pub struct Comparator {
    compare_sizes: bool,
}

impl Comparator {
    /// `compare_sizes` controls whether `size_rw`/`size_root_fs` take part
    /// in equality. Leave it off when listings are not asked to compute
    /// sizes, otherwise the permanently-absent fields would still be
    /// compared.
    pub fn new(compare_sizes: bool) -> Self {
        Self { compare_sizes }
    }

    pub fn equivalent(&self, a: &ContainerSummary, b: &ContainerSummary) -> bool {
        // Cheap scalar fields first; any mismatch settles the answer
        // before the collections are cloned and sorted.
        if a.id != b.id
            || a.image != b.image
            || a.image_id != b.image_id
            || a.command != b.command
            || a.state != b.state
            || a.status != b.status
        {
            return false;
        }
        if self.compare_sizes && (a.size_rw != b.size_rw || a.size_root_fs != b.size_root_fs) {
            return false;
        }

        a.names == b.names
            && a.created == b.created
            && a.labels == b.labels
            && sorted_ports(a.ports.as_deref()) == sorted_ports(b.ports.as_deref())
            && sorted_mounts(a.mounts.as_deref()) == sorted_mounts(b.mounts.as_deref())
            && a.host_config == b.host_config
            && a.network_settings == b.network_settings
    }
}

fn sorted_ports(ports: Option<&[Port]>) -> Option<Vec<Port>> {
    ports.map(|ports| {
        let mut ports = ports.to_vec();
        ports.sort_by_key(|p| (p.private_port, p.typ));
        ports
    })
}

fn sorted_mounts(mounts: Option<&[MountPoint]>) -> Option<Vec<MountPoint>> {
    mounts.map(|mounts| {
        let mut mounts = mounts.to_vec();
        mounts.sort_by(|a, b| a.destination.cmp(&b.destination));
        mounts
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bollard::models::{MountPoint, Port, PortTypeEnum};

    use super::*;

    fn port(private: u16, public: Option<u16>) -> Port {
        Port {
            private_port: private,
            public_port: public,
            typ: Some(PortTypeEnum::TCP),
            ..Default::default()
        }
    }

    fn mount(destination: &str, source: &str) -> MountPoint {
        MountPoint {
            destination: Some(destination.to_owned()),
            source: Some(source.to_owned()),
            mode: Some("rw".to_owned()),
            ..Default::default()
        }
    }

    fn record(id: &str) -> ContainerSummary {
        ContainerSummary {
            id: Some(id.to_owned()),
            names: Some(vec![format!("/{id}")]),
            image: Some("nginx:latest".to_owned()),
            image_id: Some("sha256:4a1c".to_owned()),
            command: Some("nginx -g 'daemon off;'".to_owned()),
            created: Some(1_700_000_000),
            state: Some("running".to_owned()),
            status: Some("Up 2 minutes".to_owned()),
            ports: Some(vec![port(80, Some(8080)), port(443, None)]),
            mounts: Some(vec![mount("/data", "/srv/data"), mount("/cache", "/srv/cache")]),
            labels: Some(HashMap::from([(
                "com.example.role".to_owned(),
                "web".to_owned(),
            )])),
            ..Default::default()
        }
    }

    #[test]
    fn identical_records_are_equivalent() {
        let comparator = Comparator::new(false);
        assert!(comparator.equivalent(&record("a"), &record("a")));
    }

    #[test]
    fn port_order_is_normalised() {
        let comparator = Comparator::new(false);
        let a = record("a");
        let mut b = record("a");
        b.ports.as_mut().unwrap().reverse();
        assert!(comparator.equivalent(&a, &b));
    }

    #[test]
    fn mount_order_is_normalised() {
        let comparator = Comparator::new(false);
        let a = record("a");
        let mut b = record("a");
        b.mounts.as_mut().unwrap().reverse();
        assert!(comparator.equivalent(&a, &b));
    }

    #[test]
    fn name_order_is_significant() {
        let comparator = Comparator::new(false);
        let mut a = record("a");
        a.names = Some(vec!["/web".to_owned(), "/web-alias".to_owned()]);
        let mut b = a.clone();
        b.names.as_mut().unwrap().reverse();
        assert!(!comparator.equivalent(&a, &b));
    }

    #[test]
    fn state_change_breaks_equivalence() {
        let comparator = Comparator::new(false);
        let a = record("a");
        let mut b = record("a");
        b.state = Some("exited".to_owned());
        b.status = Some("Exited (0) 1 second ago".to_owned());
        assert!(!comparator.equivalent(&a, &b));
    }

    #[test]
    fn added_port_breaks_equivalence() {
        let comparator = Comparator::new(false);
        let a = record("a");
        let mut b = record("a");
        b.ports.as_mut().unwrap().push(port(9090, None));
        assert!(!comparator.equivalent(&a, &b));
    }

    #[test]
    fn label_change_breaks_equivalence() {
        let comparator = Comparator::new(false);
        let a = record("a");
        let mut b = record("a");
        b.labels
            .as_mut()
            .unwrap()
            .insert("com.example.tier".to_owned(), "frontend".to_owned());
        assert!(!comparator.equivalent(&a, &b));
    }

    #[test]
    fn size_fields_follow_the_flag() {
        let a = record("a");
        let mut b = record("a");
        b.size_rw = Some(4096);
        assert!(Comparator::new(false).equivalent(&a, &b));
        assert!(!Comparator::new(true).equivalent(&a, &b));
    }
}
