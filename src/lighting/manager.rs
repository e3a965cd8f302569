use glam::Vec3;

use super::light::{Light, LightShaderData};

/// Lights the shader array has room for.
pub const MAX_LIGHTS: usize = 8;

/// Ordered set of up to [`MAX_LIGHTS`] lights plus the global ambient
/// color.
///
/// Order is insertion order and is the order lights occupy the shader
/// array. Names are lookup keys; when several lights share a name, lookups
/// by name hit the first.
#[derive(Debug, Clone, PartialEq)]
pub struct LightManager {
    lights: Vec<Light>,
    ambient: Vec3,
}

impl Default for LightManager {
    fn default() -> Self {
        Self {
            lights: Vec::with_capacity(MAX_LIGHTS),
            ambient: Vec3::splat(0.1),
        }
    }
}

impl LightManager {
    /// Empty manager with a dim grey ambient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Management --

    /// Append a light. Returns `false` and drops it when the manager is
    /// already full.
    pub fn add(&mut self, light: Light) -> bool {
        if self.lights.len() >= MAX_LIGHTS {
            log::warn!(
                "light '{}' ignored: all {MAX_LIGHTS} slots in use",
                light.name()
            );
            return false;
        }
        log::debug!("added light '{}'", light.name());
        self.lights.push(light);
        true
    }

    /// Remove the first light called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Light> {
        let index = self.index_of(name)?;
        Some(self.lights.remove(index))
    }

    /// Remove the light at `index`, shifting later lights down.
    pub fn remove_at(&mut self, index: usize) -> Option<Light> {
        (index < self.lights.len()).then(|| self.lights.remove(index))
    }

    /// Remove every light. The ambient color is kept.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    // -- Lookup --

    /// First light called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Light> {
        self.lights.iter().find(|l| l.name() == name)
    }

    /// Mutable access to the first light called `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Light> {
        self.lights.iter_mut().find(|l| l.name() == name)
    }

    /// Light at `index`.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&Light> {
        self.lights.get(index)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.lights.iter().position(|l| l.name() == name)
    }

    /// All lights in slot order.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of lights, enabled or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether no light has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Whether another [`add`](Self::add) would be rejected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.lights.len() >= MAX_LIGHTS
    }

    /// Directional lights in slot order.
    pub fn directional_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(|l| l.is_directional())
    }

    /// Point lights in slot order.
    pub fn point_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(|l| l.is_point())
    }

    /// Enabled lights paired with their index among enabled lights.
    pub fn enabled_lights(&self) -> impl Iterator<Item = (usize, &Light)> {
        self.lights.iter().filter(|l| l.is_enabled()).enumerate()
    }

    /// Number of enabled lights.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.lights.iter().filter(|l| l.is_enabled()).count()
    }

    // -- Ambient --

    /// Global ambient color.
    #[must_use]
    pub const fn ambient(&self) -> Vec3 {
        self.ambient
    }

    /// Set the global ambient color.
    pub fn set_ambient(&mut self, color: Vec3) {
        self.ambient = color;
    }

    // -- Upload --

    /// Fixed-size uniform array: one record per light in slot order
    /// (disabled lights keep `enabled = 0`), remaining slots zeroed.
    #[must_use]
    pub fn shader_data(&self) -> [LightShaderData; MAX_LIGHTS] {
        let mut slots = [LightShaderData::default(); MAX_LIGHTS];
        for (slot, light) in slots.iter_mut().zip(&self.lights) {
            *slot = light.shader_data();
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> Light {
        Light::directional("sun", Vec3::new(-0.3, -1.0, -0.2))
    }

    fn lamp(name: &str) -> Light {
        Light::point(name, Vec3::new(0.0, 2.0, 0.0))
    }

    #[test]
    fn starts_empty_with_dim_ambient() {
        let manager = LightManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.enabled_count(), 0);
        assert_eq!(manager.ambient(), Vec3::splat(0.1));
    }

    #[test]
    fn add_get_and_filter_by_kind() {
        let mut manager = LightManager::new();
        assert!(manager.add(sun()));
        assert!(manager.add(lamp("lamp")));
        assert_eq!(manager.len(), 2);
        assert!(manager.get("sun").is_some_and(Light::is_directional));
        assert!(manager.get_at(1).is_some_and(|l| l.name() == "lamp"));
        assert!(manager.get("missing").is_none());
        assert!(manager.get_at(5).is_none());
        assert_eq!(manager.directional_lights().count(), 1);
        assert_eq!(manager.point_lights().count(), 1);
    }

    #[test]
    fn ninth_light_is_rejected() {
        let mut manager = LightManager::new();
        for i in 0..MAX_LIGHTS {
            assert!(manager.add(lamp(&format!("lamp {i}"))));
        }
        assert!(manager.is_full());
        assert!(!manager.add(lamp("extra")));
        assert_eq!(manager.len(), MAX_LIGHTS);
        assert!(manager.get("extra").is_none());
    }

    #[test]
    fn remove_by_name_and_index() {
        let mut manager = LightManager::new();
        let _ = manager.add(sun());
        let _ = manager.add(lamp("a"));
        let _ = manager.add(lamp("b"));

        assert!(manager.remove("a").is_some_and(|l| l.name() == "a"));
        assert!(manager.remove("a").is_none());
        assert_eq!(manager.len(), 2);

        assert!(manager.remove_at(7).is_none());
        assert!(manager.remove_at(0).is_some_and(|l| l.name() == "sun"));
        assert!(manager.get_at(0).is_some_and(|l| l.name() == "b"));

        manager.set_ambient(Vec3::splat(0.3));
        manager.clear();
        assert!(manager.is_empty());
        assert_eq!(manager.ambient(), Vec3::splat(0.3));
    }

    #[test]
    fn enabled_lights_are_counted_and_indexed() {
        let mut manager = LightManager::new();
        let _ = manager.add(sun());
        let _ = manager.add(lamp("off"));
        let _ = manager.add(lamp("on"));
        if let Some(light) = manager.get_mut("off") {
            light.set_enabled(false);
        }
        assert_eq!(manager.enabled_count(), 2);
        let names: Vec<(usize, &str)> = manager
            .enabled_lights()
            .map(|(i, l)| (i, l.name()))
            .collect();
        assert_eq!(names, vec![(0, "sun"), (1, "on")]);
    }

    #[test]
    fn shader_array_follows_slot_order() {
        let mut manager = LightManager::new();
        let _ = manager.add(sun());
        let mut off = lamp("off");
        off.set_enabled(false);
        let _ = manager.add(off);

        let data = manager.shader_data();
        assert_eq!(data[0].light_type, 0);
        assert_eq!(data[0].enabled, 1);
        assert_eq!(data[1].light_type, 1);
        assert_eq!(data[1].enabled, 0);
        assert_eq!(data[1].position, [0.0, 2.0, 0.0]);
        assert!(data[2..].iter().all(|d| *d == LightShaderData::default()));

        let bytes: &[u8] = bytemuck::cast_slice(&data);
        assert_eq!(bytes.len(), MAX_LIGHTS * LightShaderData::SIZE);
    }
}
