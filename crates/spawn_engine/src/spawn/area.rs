//! Spawn area: population control and pooling
//!
//! The area owns every object it ever created in a slot-map arena. The pool
//! is a FIFO list of handles into that arena for objects that are parked and
//! waiting to be reused.
//!
//! Each [`SpawnArea::tick`]:
//! 1. rotates the area by its fixed rate,
//! 2. tops the active population back up to `target_count`,
//! 3. ticks every active object,
//! 4. retires the objects that finished fading.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::debug::draw::{DebugDraw, BOUNDS_COLOR};
use crate::foundation::collections::{AreaId, ObjectArena, ObjectHandle, ObjectKey};
use crate::foundation::logging::{debug, info, trace, warn};
use crate::foundation::math::{Transform, Vec3, Vec4};
use crate::render::RenderHost;
use super::config::SpawnAreaConfig;
use super::error::SpawnError;
use super::object::{ManagedObject, ObjectTick};
use super::policy::PoolingPolicy;
use super::random;

/// Running counters for an area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnStats {
    /// Objects newly created (including parked buffer objects)
    pub created: u64,
    /// Objects reactivated from the pool
    pub reused: u64,
    /// Objects returned to the pool
    pub pooled: u64,
    /// Objects permanently destroyed
    pub destroyed: u64,
    /// Pool acquisitions that found the pool empty
    pub underruns: u64,
}

/// Rotating spherical region that keeps a population of fading objects alive
pub struct SpawnArea<R: Rng = StdRng> {
    id: AreaId,
    config: SpawnAreaConfig,
    policy: PoolingPolicy,
    transform: Transform,
    rotation_rate: Vec3,
    objects: ObjectArena<ManagedObject>,
    pool: VecDeque<ObjectKey>,
    active_count: usize,
    rng: R,
    stats: SpawnStats,
    retiring: Vec<ObjectKey>,
}

impl SpawnArea<StdRng> {
    /// Initialize with a `StdRng` seeded from `config.seed`, or from entropy
    pub fn from_config<H: RenderHost + ?Sized>(
        config: SpawnAreaConfig,
        host: &mut H,
    ) -> Result<Self, SpawnError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::initialize(config, rng, host)
    }

    /// Initialize with a `StdRng` seeded from `seed`
    pub fn with_seed<H: RenderHost + ?Sized>(
        config: SpawnAreaConfig,
        seed: u64,
        host: &mut H,
    ) -> Result<Self, SpawnError> {
        Self::initialize(config, StdRng::seed_from_u64(seed), host)
    }
}

impl<R: Rng> SpawnArea<R> {
    /// Validate `config`, draw the area rotation and create the initial
    /// population: `target_count` active objects plus `pool_buffer` parked ones.
    pub fn initialize<H: RenderHost + ?Sized>(
        config: SpawnAreaConfig,
        mut rng: R,
        host: &mut H,
    ) -> Result<Self, SpawnError> {
        config.validate()?;

        let rotation_rate = random::euler_rotation_rate(&mut rng, config.area_rotations_per_sec);
        let policy = PoolingPolicy::from_use_pooling(config.use_pooling);

        let mut area = Self {
            id: AreaId::next(),
            policy,
            transform: Transform::identity(),
            rotation_rate,
            objects: ObjectArena::with_capacity_and_key(config.initial_capacity()),
            pool: VecDeque::with_capacity(config.pool_buffer as usize),
            active_count: 0,
            rng,
            stats: SpawnStats::default(),
            retiring: Vec::new(),
            config,
        };

        host.set_area_transform(&area.transform);
        for _ in 0..area.config.target_count {
            area.create_new(host);
        }
        for _ in 0..area.config.pool_buffer {
            area.park_new(host);
        }

        info!(
            "Spawn area {} initialized: {} active, {} pooled, policy {:?}, rotation {:?} deg/s",
            area.id.id(),
            area.active_count,
            area.pool.len(),
            area.policy,
            area.rotation_rate
        );

        Ok(area)
    }

    /// Advance the area and every active object by `dt` seconds
    pub fn tick<H: RenderHost + ?Sized>(&mut self, dt: f32, host: &mut H) {
        self.transform.rotate_euler_degrees(self.rotation_rate * dt);
        host.set_area_transform(&self.transform);

        let deficit = self.target_count().saturating_sub(self.active_count);
        for _ in 0..deficit {
            self.acquire(host);
        }

        let id = self.id;
        let fade_rate = self.config.fade_rate;
        let mut retiring = std::mem::take(&mut self.retiring);
        for (key, object) in self.objects.iter_mut().filter(|(_, object)| object.is_active()) {
            let handle = ObjectHandle::new(id, key);
            match object.tick(dt, fade_rate) {
                ObjectTick::Alive => host.set_transform(handle, object.transform()),
                ObjectTick::Fading => {
                    host.set_transform(handle, object.transform());
                    host.set_color(handle, object.color().to_vec4());
                }
                ObjectTick::Retire => retiring.push(key),
            }
        }

        for key in retiring.drain(..) {
            if let Err(err) = self.retire(ObjectHandle::new(id, key), host) {
                warn!("Spawn area {}: {err}", self.id.id());
            }
        }
        self.retiring = retiring;
    }

    fn acquire<H: RenderHost + ?Sized>(&mut self, host: &mut H) -> ObjectHandle {
        match self.policy {
            PoolingPolicy::Recycle => self.acquire_from_pool(host),
            PoolingPolicy::Discard => self.create_new(host),
        }
    }

    /// Reactivate the oldest pooled object, or create one if the pool is empty.
    ///
    /// Does not consult the target count.
    pub fn acquire_from_pool<H: RenderHost + ?Sized>(&mut self, host: &mut H) -> ObjectHandle {
        let Some(key) = self.pool.pop_front() else {
            trace!("Spawn area {}: pool empty, creating new object", self.id.id());
            self.stats.underruns += 1;
            return self.create_new(host);
        };

        let handle = ObjectHandle::new(self.id, key);
        self.randomize_and_activate(handle, host);
        self.stats.reused += 1;
        handle
    }

    /// Create, randomize and activate a new object.
    ///
    /// Does not consult the target count.
    pub fn create_new<H: RenderHost + ?Sized>(&mut self, host: &mut H) -> ObjectHandle {
        let handle = ObjectHandle::new(self.id, self.objects.insert(ManagedObject::new(self.id)));
        host.instantiate(handle);
        self.randomize_and_activate(handle, host);
        self.stats.created += 1;
        handle
    }

    fn park_new<H: RenderHost + ?Sized>(&mut self, host: &mut H) {
        let key = self.objects.insert(ManagedObject::new(self.id));
        let handle = ObjectHandle::new(self.id, key);
        host.instantiate(handle);
        host.set_active(handle, false);
        self.pool.push_back(key);
        self.stats.created += 1;
    }

    fn randomize_and_activate<H: RenderHost + ?Sized>(&mut self, handle: ObjectHandle, host: &mut H) {
        // Pooled handles always point at live objects; only active ones are removed.
        let Some(object) = self.objects.get_mut(handle.key()) else {
            return;
        };

        randomize_object(object, &self.config, &mut self.rng);
        object.activate();
        self.active_count += 1;

        host.set_transform(handle, object.transform());
        host.set_color(handle, object.color().to_vec4());
        host.set_active(handle, true);
    }

    /// Take an active object out of the active set.
    ///
    /// Under [`PoolingPolicy::Recycle`] it is parked at the pool tail, under
    /// [`PoolingPolicy::Discard`] it is destroyed. Retiring a parked object,
    /// a destroyed one, or a handle issued by another area is rejected and
    /// leaves the area untouched.
    pub fn retire<H: RenderHost + ?Sized>(
        &mut self,
        handle: ObjectHandle,
        host: &mut H,
    ) -> Result<(), SpawnError> {
        if handle.area() != self.id {
            return Err(SpawnError::UnknownObject(handle));
        }
        let object = self
            .objects
            .get_mut(handle.key())
            .ok_or(SpawnError::UnknownObject(handle))?;
        debug_assert_eq!(object.owner(), self.id);

        if !object.is_active() {
            return Err(SpawnError::DoubleRetire(handle));
        }
        object.deactivate();
        self.active_count -= 1;

        match self.policy {
            PoolingPolicy::Recycle => {
                host.set_active(handle, false);
                self.pool.push_back(handle.key());
                self.stats.pooled += 1;
                debug!("Spawn area {}: object {handle:?} returned to pool", self.id.id());
            }
            PoolingPolicy::Discard => {
                self.objects.remove(handle.key());
                host.destroy(handle);
                self.stats.destroyed += 1;
                debug!("Spawn area {}: object {handle:?} destroyed", self.id.id());
            }
        }

        Ok(())
    }

    /// Switch between recycling and discarding; takes effect on the next tick.
    ///
    /// Pooled and active objects are left as they are.
    pub fn set_policy(&mut self, policy: PoolingPolicy) {
        if self.policy != policy {
            info!("Spawn area {}: pooling policy {:?} -> {:?}", self.id.id(), self.policy, policy);
        }
        self.policy = policy;
        self.config.use_pooling = policy.is_pooling();
    }

    /// Flag form of [`Self::set_policy`]
    pub fn set_use_pooling(&mut self, use_pooling: bool) {
        self.set_policy(PoolingPolicy::from_use_pooling(use_pooling));
    }

    /// Queue the spawn bounds if `draw_bounds` is enabled
    pub fn debug_draw(&self, draw: &mut DebugDraw) {
        if self.config.draw_bounds {
            draw.wire_sphere(self.transform.position, self.config.radius, Vec4::from(BOUNDS_COLOR));
        }
    }

    /// Destroy every object the area owns, active or pooled
    pub fn shutdown<H: RenderHost + ?Sized>(mut self, host: &mut H) {
        let count = self.objects.len();
        for (key, _) in self.objects.drain() {
            host.destroy(ObjectHandle::new(self.id, key));
        }
        info!("Spawn area {} shut down, {count} objects destroyed", self.id.id());
    }

    /// Identity stamped on owned objects
    pub fn id(&self) -> AreaId {
        self.id
    }

    /// Active configuration
    pub fn config(&self) -> &SpawnAreaConfig {
        &self.config
    }

    /// Current pooling policy
    pub fn policy(&self) -> PoolingPolicy {
        self.policy
    }

    /// Desired number of active objects
    pub fn target_count(&self) -> usize {
        self.config.target_count as usize
    }

    /// Objects currently ticking
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Objects parked in the pool
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// All objects the area owns
    pub fn total_count(&self) -> usize {
        self.objects.len()
    }

    /// Pooled handles, oldest first
    pub fn pooled(&self) -> impl Iterator<Item = ObjectHandle> + '_ {
        let id = self.id;
        self.pool.iter().map(move |key| ObjectHandle::new(id, *key))
    }

    /// Area rotation rate in degrees per second
    pub fn rotation_rate(&self) -> Vec3 {
        self.rotation_rate
    }

    /// Area transform (rotation accumulates every tick)
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Look up an owned object
    pub fn object(&self, handle: ObjectHandle) -> Option<&ManagedObject> {
        if handle.area() != self.id {
            return None;
        }
        self.objects.get(handle.key())
    }

    /// Active objects with their handles
    pub fn active_objects(&self) -> impl Iterator<Item = (ObjectHandle, &ManagedObject)> {
        let id = self.id;
        self.objects
            .iter()
            .filter(|(_, object)| object.is_active())
            .map(move |(key, object)| (ObjectHandle::new(id, key), object))
    }

    /// Running counters
    pub fn stats(&self) -> SpawnStats {
        self.stats
    }
}

/// Draw fresh position, color, size, lifetime and rotation rate for `object`.
///
/// The orientation is reset too, so a recycled object starts exactly like a
/// new one.
pub fn randomize_object<R: Rng + ?Sized>(
    object: &mut ManagedObject,
    config: &SpawnAreaConfig,
    rng: &mut R,
) {
    object.reset_orientation();
    object.set_random_position(rng, config.radius);
    object.set_random_color(rng, config.red, config.green, config.blue);
    object.set_random_size(rng, config.size);
    object.set_random_lifetime(rng, config.lifetime);
    object.set_random_rotation_rate(rng, config.rotations_per_sec);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandRecorder, NullHost, RenderCommand};
    use crate::spawn::config::SpawnRange;
    use crate::spawn::object::ObjectState;

    fn small_config() -> SpawnAreaConfig {
        SpawnAreaConfig {
            target_count: 4,
            pool_buffer: 2,
            seed: Some(11),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_population() {
        let mut host = CommandRecorder::new();
        let area = SpawnArea::from_config(small_config(), &mut host).unwrap();

        assert_eq!(area.active_count(), 4);
        assert_eq!(area.pool_len(), 2);
        assert_eq!(area.total_count(), 6);
        assert_eq!(host.instantiated(), 6);
        assert_eq!(area.stats().created, 6);
        assert!(area.pooled().all(|h| area.object(h).unwrap().state() == ObjectState::Pooled));
    }

    #[test]
    fn test_invalid_config_aborts() {
        let config = SpawnAreaConfig { target_count: 0, ..small_config() };
        let result = SpawnArea::from_config(config, &mut NullHost);
        assert!(matches!(result, Err(SpawnError::Config(_))));
    }

    #[test]
    fn test_area_rotation_within_range() {
        let config = SpawnAreaConfig {
            area_rotations_per_sec: SpawnRange::new(0.1, 0.2),
            ..small_config()
        };
        for seed in 0..20 {
            let area = SpawnArea::with_seed(config.clone(), seed, &mut NullHost).unwrap();
            let rate = area.rotation_rate();
            let same_sign = rate.iter().all(|v| *v > 0.0) || rate.iter().all(|v| *v < 0.0);
            assert!(same_sign);
            assert!(rate.iter().all(|v| v.abs() >= 36.0 - 1e-3 && v.abs() <= 72.0 + 1e-3));
        }
    }

    #[test]
    fn test_tick_rotates_area() {
        let config = SpawnAreaConfig {
            area_rotations_per_sec: SpawnRange::new(0.1, 0.2),
            ..small_config()
        };
        let mut host = CommandRecorder::new();
        let mut area = SpawnArea::from_config(config, &mut host).unwrap();
        host.drain();

        area.tick(0.1, &mut host);
        assert!(area.transform().rotation.angle() > 0.0);
        let expected = RenderCommand::SetAreaTransform(area.transform().clone());
        assert_eq!(host.commands()[0], expected);
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = SpawnArea::with_seed(small_config(), 99, &mut NullHost).unwrap();
        let b = SpawnArea::with_seed(small_config(), 99, &mut NullHost).unwrap();

        let positions = |area: &SpawnArea| -> Vec<Vec3> {
            area.active_objects().map(|(_, o)| o.transform().position).collect()
        };
        assert_eq!(positions(&a), positions(&b));
        assert_eq!(a.rotation_rate(), b.rotation_rate());
    }

    #[test]
    fn test_double_retire_is_rejected() {
        let mut host = CommandRecorder::new();
        let mut area = SpawnArea::from_config(small_config(), &mut host).unwrap();
        let (handle, _) = area.active_objects().next().unwrap();

        area.retire(handle, &mut host).unwrap();
        assert_eq!(area.active_count(), 3);
        assert_eq!(area.pool_len(), 3);

        assert_eq!(area.retire(handle, &mut host), Err(SpawnError::DoubleRetire(handle)));
        assert_eq!(area.active_count(), 3);
        assert_eq!(area.pool_len(), 3);
    }

    #[test]
    fn test_retire_destroyed_is_unknown() {
        let config = SpawnAreaConfig { use_pooling: false, ..small_config() };
        let mut host = CommandRecorder::new();
        let mut area = SpawnArea::from_config(config, &mut host).unwrap();
        let (handle, _) = area.active_objects().next().unwrap();

        area.retire(handle, &mut host).unwrap();
        assert_eq!(host.destroyed(), 1);
        assert!(area.object(handle).is_none());
        assert_eq!(area.retire(handle, &mut host), Err(SpawnError::UnknownObject(handle)));
    }

    #[test]
    fn test_handle_from_other_area_is_unknown() {
        let mut host = CommandRecorder::new();
        let mut a = SpawnArea::from_config(small_config(), &mut host).unwrap();
        let b = SpawnArea::from_config(small_config(), &mut host).unwrap();
        let (foreign, _) = b.active_objects().next().unwrap();
        host.drain();

        assert_eq!(a.retire(foreign, &mut host), Err(SpawnError::UnknownObject(foreign)));
        assert_eq!(a.active_count(), 4);
        assert_eq!(a.pool_len(), 2);
        assert!(host.commands().is_empty());
        assert!(a.object(foreign).is_none());
        assert!(b.object(foreign).is_some());
    }

    #[test]
    fn test_pool_is_fifo() {
        let mut host = CommandRecorder::new();
        let mut area = SpawnArea::from_config(small_config(), &mut host).unwrap();
        let first_parked = area.pooled().next().unwrap();

        let handle = area.acquire_from_pool(&mut host);
        assert_eq!(handle, first_parked);
        assert_eq!(area.stats().reused, 1);
    }

    #[test]
    fn test_empty_pool_falls_back_to_create() {
        let config = SpawnAreaConfig { pool_buffer: 0, ..small_config() };
        let mut host = CommandRecorder::new();
        let mut area = SpawnArea::from_config(config, &mut host).unwrap();
        host.drain();

        let handle = area.acquire_from_pool(&mut host);
        assert_eq!(host.instantiated(), 1);
        assert_eq!(area.stats().underruns, 1);
        assert!(area.object(handle).unwrap().is_active());
    }

    #[test]
    fn test_debug_draw_respects_flag() {
        let mut draw = DebugDraw::new();
        let area = SpawnArea::from_config(small_config(), &mut NullHost).unwrap();
        area.debug_draw(&mut draw);
        assert_eq!(draw.shapes().len(), 1);

        draw.clear();
        let config = SpawnAreaConfig { draw_bounds: false, ..small_config() };
        let area = SpawnArea::from_config(config, &mut NullHost).unwrap();
        area.debug_draw(&mut draw);
        assert!(draw.shapes().is_empty());
    }

    #[test]
    fn test_shutdown_destroys_everything() {
        let mut host = CommandRecorder::new();
        let area = SpawnArea::from_config(small_config(), &mut host).unwrap();
        host.drain();

        area.shutdown(&mut host);
        assert_eq!(host.destroyed(), 6);
    }
}
