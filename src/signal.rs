//! Scan observations and strongest-match reduction.
//!
//! Every cycle the scanner produces a fresh list of [`ApObservation`]s; the
//! reduction collapses it to one effective RSSI for the monitored set.  The
//! result is always defined: when nothing monitored is visible, the
//! configured floor stands in, so the rest of the pipeline never has to
//! handle a missing value.

use crate::config::Ssid;

/// One access point sighting from a radio scan.  Ephemeral: produced fresh
/// each cycle and discarded once the cycle completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApObservation {
    /// Network name as broadcast (empty for hidden networks).
    pub ssid: Ssid,
    /// Received signal strength (dBm); more negative = weaker.
    pub rssi_dbm: i8,
}

/// Strongest signal among observations of monitored networks, or
/// `floor_dbm` when none match.
///
/// Duplicate names (several access points broadcasting the same SSID) are
/// resolved by taking the strongest sighting.
pub fn effective_rssi(observations: &[ApObservation], monitored: &[Ssid], floor_dbm: i32) -> i32 {
    observations
        .iter()
        .filter(|obs| monitored.iter().any(|name| *name == obs.ssid))
        .map(|obs| i32::from(obs.rssi_dbm))
        .max()
        .unwrap_or(floor_dbm)
}

/// Number of observations belonging to the monitored set (diagnostics only).
pub fn matched_count(observations: &[ApObservation], monitored: &[Ssid]) -> usize {
    observations
        .iter()
        .filter(|obs| monitored.iter().any(|name| *name == obs.ssid))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ssid(name: &str) -> Ssid {
        let mut s = Ssid::new();
        let _ = s.push_str(name);
        s
    }

    fn obs(name: &str, rssi_dbm: i8) -> ApObservation {
        ApObservation {
            ssid: ssid(name),
            rssi_dbm,
        }
    }

    #[test]
    fn strongest_duplicate_wins() {
        let observations = [obs("A", -60), obs("B", -40), obs("A", -35)];
        let monitored = [ssid("A")];
        assert_eq!(effective_rssi(&observations, &monitored, -80), -35);
    }

    #[test]
    fn unmonitored_networks_are_ignored() {
        let observations = [obs("B", -20), obs("C", -25)];
        let monitored = [ssid("A")];
        assert_eq!(effective_rssi(&observations, &monitored, -80), -80);
    }

    #[test]
    fn empty_scan_falls_back_to_floor() {
        let monitored = [ssid("A")];
        assert_eq!(effective_rssi(&[], &monitored, -80), -80);
    }

    #[test]
    fn multiple_monitored_names_compete() {
        let observations = [obs("A", -70), obs("B", -45), obs("C", -40)];
        let monitored = [ssid("A"), ssid("B")];
        assert_eq!(effective_rssi(&observations, &monitored, -80), -45);
    }

    #[test]
    fn membership_is_exact_string_equality() {
        // Prefix or case variants must not match.
        let observations = [obs("AndroidAP2", -10), obs("androidap", -10)];
        let monitored = [ssid("AndroidAP")];
        assert_eq!(effective_rssi(&observations, &monitored, -80), -80);
    }

    #[test]
    fn matched_count_tallies_only_monitored() {
        let observations = [obs("A", -60), obs("B", -40), obs("A", -35)];
        let monitored = [ssid("A")];
        assert_eq!(matched_count(&observations, &monitored), 2);
        assert_eq!(matched_count(&observations, &[]), 0);
    }
}
